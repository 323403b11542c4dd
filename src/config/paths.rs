//! Path management for expense-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`directories::ProjectDirs`)
//! 3. The current working directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Locale;
use crate::storage::FileFormat;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_LEDGER_DATA_DIR";

/// Manages all paths used by expense-ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance using the resolution order above
    pub fn new() -> Self {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Self { base_dir }
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default ledger file for a format and locale
    pub fn ledger_file(&self, format: FileFormat, locale: Locale) -> PathBuf {
        self.base_dir.join(format.default_file_name(locale))
    }

    /// Directory the walkthrough writes its sample files to
    ///
    /// Kept apart from the base directory so the samples never replace the
    /// primary ledger files.
    pub fn demo_dir(&self) -> PathBuf {
        self.base_dir.join("demo")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> LedgerResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create data directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
