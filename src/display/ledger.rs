//! Ledger report formatting
//!
//! Summary rows are sorted by category name so output is stable even though
//! the underlying summary map is unordered.

use super::money::format_amount;
use crate::ledger::Ledger;

/// Format the current balance line
pub fn format_balance(ledger: &Ledger, symbol: &str) -> String {
    format!("Current balance: {}", format_amount(ledger.balance(), symbol))
}

/// Format the expense summary, one category per line
pub fn format_summary(ledger: &Ledger, symbol: &str) -> String {
    let mut rows: Vec<_> = ledger.summary_by_category().into_iter().collect();
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    let mut output = String::from("Expense summary by category:\n");
    for (category, total) in rows {
        output.push_str(&format!(" - {}: {}\n", category, format_amount(total, symbol)));
    }
    output
}

/// Format all transactions as a register
pub fn format_register(ledger: &Ledger, symbol: &str) -> String {
    if ledger.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:4} {:8} {:24} {:>14}\n", "#", "Kind", "Category", "Amount"));
    output.push_str(&"-".repeat(53));
    output.push('\n');

    for (i, txn) in ledger.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:8} {:24} {:>14}\n",
            i + 1,
            txn.kind().to_string(),
            truncate(txn.category(), 24),
            format_amount(txn.amount(), symbol)
        ));
    }

    output
}

/// Truncate a string to a maximum number of characters with ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
