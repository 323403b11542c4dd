//! User settings for expense-ledger
//!
//! Manages user preferences persisted in `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Locale;
use crate::storage::{write_atomic, FileFormat};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Vocabulary ledger files are read and written in
    #[serde(default)]
    pub locale: Locale,

    /// Format of the primary ledger file
    #[serde(default)]
    pub default_format: FileFormat,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            default_format: FileFormat::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> LedgerResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk, replacing the file atomically
    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;

        write_atomic(paths.settings_file(), |writer| {
            serde_json::to_writer_pretty(writer, self)
                .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))
        })
    }
}
