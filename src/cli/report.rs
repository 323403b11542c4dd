//! Report CLI commands
//!
//! Balance and per-category expense summary.

use super::session::Session;
use crate::display::{format_balance, format_summary};
use crate::error::LedgerResult;

pub fn handle_balance(session: &Session) -> LedgerResult<()> {
    let ledger = session.open_ledger()?;
    println!("{}", format_balance(&ledger, session.symbol()));
    Ok(())
}

pub fn handle_summary(session: &Session) -> LedgerResult<()> {
    let ledger = session.open_ledger()?;
    print!("{}", format_summary(&ledger, session.symbol()));
    Ok(())
}
