//! expense-ledger - personal income and expense tracking
//!
//! This library records income and expense transactions, computes the
//! running balance and per-category expense totals, and persists the
//! ledger to JSON or CSV files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Validated transactions, flat records and locale vocabularies
//! - `ledger`: The ordered transaction set with queries and save/load
//! - `storage`: JSON and CSV codecs with atomic file writes
//! - `config`: Data directory resolution and user settings
//! - `display`: Terminal formatting
//! - `cli`: Command definitions for the `ledger` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::Ledger;
//!
//! # fn main() -> Result<(), expense_ledger::LedgerError> {
//! let mut ledger = Ledger::new();
//! ledger.add("income", "salary", 2500.0)?;
//! ledger.add("expense", "food", 300.0)?;
//! assert_eq!(ledger.balance(), 2200.0);
//!
//! ledger.save_json("transactions.json")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, LoadOutcome};
pub use models::{Locale, Transaction, TransactionKind, TransactionRecord};
pub use storage::FileFormat;
