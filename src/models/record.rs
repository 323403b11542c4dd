//! Flat record representation shared by the file encoders
//!
//! Both the JSON and the CSV codecs read and write `TransactionRecord`s, so
//! the two formats cannot drift apart on what a transaction contains.

use super::locale::Locale;
use super::transaction::TransactionKind;

/// The three persisted fields of a transaction, in their fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
}

impl TransactionRecord {
    /// The kind rendered in the locale's vocabulary
    pub fn kind_token(&self, locale: Locale) -> &'static str {
        self.kind.token(locale)
    }
}
