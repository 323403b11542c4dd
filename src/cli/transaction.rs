//! Transaction CLI commands
//!
//! Implements recording and listing transactions in the primary ledger file.

use super::session::Session;
use crate::display::{format_amount, format_register};
use crate::error::LedgerResult;

/// Record a transaction and persist the ledger
pub fn handle_add(session: &Session, kind: &str, category: &str, amount: f64) -> LedgerResult<()> {
    let mut ledger = session.open_ledger()?;
    ledger.add(kind, category, amount)?;
    session.save_ledger(&ledger)?;

    println!(
        "Recorded {} '{}' of {}",
        kind,
        category,
        format_amount(amount, session.symbol())
    );
    println!("Data saved to {}", session.file.display());
    Ok(())
}

/// Print every transaction in insertion order
pub fn handle_list(session: &Session) -> LedgerResult<()> {
    let ledger = session.open_ledger()?;
    print!("{}", format_register(&ledger, session.symbol()));
    Ok(())
}
