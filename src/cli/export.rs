//! CLI command for exporting the ledger
//!
//! Reads the primary ledger file and writes it out in either format.

use std::path::PathBuf;

use super::session::Session;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::FileFormat;

/// Write the primary ledger to `output`
///
/// Without an explicit format, the output file's extension decides.
pub fn handle_export(
    session: &Session,
    output: PathBuf,
    format: Option<FileFormat>,
) -> LedgerResult<()> {
    let format = format
        .or_else(|| FileFormat::from_path(&output))
        .ok_or_else(|| {
            LedgerError::Config(format!(
                "Cannot infer a format for {}; pass --to json or --to csv",
                output.display()
            ))
        })?;

    let ledger = session.open_ledger()?;
    ledger.save(&output, format)?;

    println!(
        "Exported {} transactions as {} to: {}",
        ledger.len(),
        format,
        output.display()
    );
    Ok(())
}
