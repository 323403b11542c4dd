//! Core data models for expense-ledger
//!
//! This module contains the validated transaction value, its flat record
//! form used for persistence, and the locale vocabularies files are written in.

pub mod locale;
pub mod record;
pub mod transaction;

pub use locale::{FieldNames, Locale};
pub use record::TransactionRecord;
pub use transaction::{Transaction, TransactionKind};
