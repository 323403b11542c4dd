//! Custom error types for expense-ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Validation failures, a missing source file and I/O-class failures are
//! kept as distinct variants so callers can tell them apart.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Kind token is not one of the locale's two recognized tokens
    #[error("Invalid transaction kind '{kind}': expected {income} or {expense}")]
    InvalidTransactionKind {
        kind: String,
        income: &'static str,
        expense: &'static str,
    },

    /// Amount is zero, negative or NaN
    #[error("Amount must be greater than 0, got {amount}")]
    NonPositiveAmount { amount: f64 },

    /// Amount is infinite and cannot be persisted
    #[error("Amount must be a finite number, got {amount}")]
    NonFiniteAmount { amount: f64 },

    /// CSV amount text could not be parsed as a number
    #[error("Malformed amount '{value}': not a number")]
    MalformedAmount { value: String },

    /// Load source does not exist
    #[error("Source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Persisted data is well-formed but does not have the expected shape
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A persisted record failed to decode
    #[error("Record {}: {source}", .index + 1)]
    Record {
        index: usize,
        #[source]
        source: Box<LedgerError>,
    },
}

impl LedgerError {
    /// Wrap an error with the position of the record that produced it
    pub fn in_record(index: usize, source: LedgerError) -> Self {
        Self::Record {
            index,
            source: Box::new(source),
        }
    }

    /// The innermost error, unwrapping any record context
    pub fn root(&self) -> &LedgerError {
        match self {
            Self::Record { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this is a transaction validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self.root(),
            Self::InvalidTransactionKind { .. }
                | Self::NonPositiveAmount { .. }
                | Self::NonFiniteAmount { .. }
                | Self::MalformedAmount { .. }
        )
    }

    /// Check if this is a "source not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::SourceNotFound { .. })
    }

    /// Check if this is an I/O-class failure (read, write or structure)
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self.root(),
            Self::Io(_) | Self::Json(_) | Self::Csv(_) | Self::InvalidFormat(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
