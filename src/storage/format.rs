//! Supported file formats

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// On-disk encoding of a ledger
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// JSON array of objects
    #[default]
    Json,
    /// Header row plus one row per transaction
    Csv,
}

impl FileFormat {
    /// Infer the format from a file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }

    /// Default file name for this format in the given locale
    pub fn default_file_name(&self, locale: Locale) -> &'static str {
        match self {
            Self::Json => locale.default_json_file(),
            Self::Csv => locale.default_csv_file(),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(FileFormat::from_path("a/b.json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_path("B.CSV"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_path("notes.txt"), None);
        assert_eq!(FileFormat::from_path("no_extension"), None);
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            FileFormat::Csv.default_file_name(Locale::English),
            "transactions.csv"
        );
        assert_eq!(
            FileFormat::Json.default_file_name(Locale::Spanish),
            "movimientos.json"
        );
    }
}
