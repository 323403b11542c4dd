//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, the balance, the category
//! summary and the transaction register.

pub mod ledger;
pub mod money;

pub use ledger::{format_balance, format_register, format_summary};
pub use money::format_amount;
