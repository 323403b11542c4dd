//! Storage layer for expense-ledger
//!
//! Encodes transaction records as JSON or CSV and moves them to and from
//! disk with atomic writes and automatic directory creation.

pub mod csv;
pub mod file_io;
pub mod format;
pub mod json;

pub use file_io::{open_source, write_atomic};
pub use format::FileFormat;

use std::path::Path;

use crate::error::LedgerResult;
use crate::models::{Locale, TransactionRecord};

/// Read every record from `path` in the given format
///
/// Returns `SourceNotFound` if the file does not exist.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    format: FileFormat,
    locale: Locale,
) -> LedgerResult<Vec<TransactionRecord>> {
    let reader = open_source(path)?;
    match format {
        FileFormat::Json => json::read_records(reader, locale),
        FileFormat::Csv => csv::read_records(reader, locale),
    }
}

/// Atomically replace `path` with the encoded records
pub fn write_records<P: AsRef<Path>>(
    path: P,
    format: FileFormat,
    locale: Locale,
    records: &[TransactionRecord],
) -> LedgerResult<()> {
    write_atomic(path, |writer| match format {
        FileFormat::Json => json::write_records(writer, records, locale),
        FileFormat::Csv => csv::write_records(writer, records, locale),
    })
}
