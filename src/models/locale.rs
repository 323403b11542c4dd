//! Locale vocabularies
//!
//! A locale decides the words a ledger file is written in: the two kind
//! tokens, the three record field names and the default file names. The
//! data model is the same for every locale.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record field names in their fixed order (kind, category, amount)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNames {
    pub kind: &'static str,
    pub category: &'static str,
    pub amount: &'static str,
}

impl FieldNames {
    /// The three names as a header row
    pub fn as_array(&self) -> [&'static str; 3] {
        [self.kind, self.category, self.amount]
    }
}

/// Vocabulary used to read and write ledger files
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Token for an income entry
    pub fn income_token(&self) -> &'static str {
        match self {
            Self::English => "income",
            Self::Spanish => "ingreso",
        }
    }

    /// Token for an expense entry
    pub fn expense_token(&self) -> &'static str {
        match self {
            Self::English => "expense",
            Self::Spanish => "gasto",
        }
    }

    pub fn field_names(&self) -> FieldNames {
        match self {
            Self::English => FieldNames {
                kind: "type",
                category: "category",
                amount: "amount",
            },
            Self::Spanish => FieldNames {
                kind: "tipo",
                category: "categoria",
                amount: "monto",
            },
        }
    }

    /// Default file name for JSON persistence
    pub fn default_json_file(&self) -> &'static str {
        match self {
            Self::English => "transactions.json",
            Self::Spanish => "movimientos.json",
        }
    }

    /// Default file name for CSV persistence
    pub fn default_csv_file(&self) -> &'static str {
        match self {
            Self::English => "transactions.csv",
            Self::Spanish => "movimientos.csv",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Spanish => write!(f, "spanish"),
        }
    }
}
