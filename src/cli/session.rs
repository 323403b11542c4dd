//! Per-invocation resolution of the ledger file, format and locale

use std::path::PathBuf;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Locale;
use crate::storage::FileFormat;

/// Everything a command needs to find and read the primary ledger file
#[derive(Debug, Clone)]
pub struct Session {
    pub paths: LedgerPaths,
    pub settings: Settings,
    pub locale: Locale,
    pub format: FileFormat,
    pub file: PathBuf,
}

impl Session {
    /// Combine settings with command-line overrides
    ///
    /// The format comes from `--format`, then the file extension, then the
    /// settings. The file defaults to the locale's name in the data directory.
    pub fn resolve(
        paths: LedgerPaths,
        settings: Settings,
        file: Option<PathBuf>,
        format: Option<FileFormat>,
        locale: Option<Locale>,
    ) -> Self {
        let locale = locale.unwrap_or(settings.locale);
        let format = format
            .or_else(|| file.as_deref().and_then(FileFormat::from_path))
            .unwrap_or(settings.default_format);
        let file = file.unwrap_or_else(|| paths.ledger_file(format, locale));

        Self {
            paths,
            settings,
            locale,
            format,
            file,
        }
    }

    /// Currency symbol for display
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Load the primary ledger file, starting empty if it does not exist
    pub fn open_ledger(&self) -> LedgerResult<Ledger> {
        let mut ledger = Ledger::with_locale(self.locale);
        let outcome = ledger.load(&self.file, self.format)?;
        if outcome.is_not_found() {
            eprintln!(
                "No prior data found at {}. Starting with an empty ledger.",
                self.file.display()
            );
        }
        Ok(ledger)
    }

    /// Write the ledger back to the primary file
    pub fn save_ledger(&self, ledger: &Ledger) -> LedgerResult<()> {
        ledger.save(&self.file, self.format)
    }
}
