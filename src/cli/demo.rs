//! Walkthrough of the ledger with a fixed set of example transactions

use std::path::Path;

use crate::display::{format_balance, format_summary};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{Locale, TransactionKind};
use crate::storage::FileFormat;

/// Example entries as (kind, English category, Spanish category, amount)
const EXAMPLES: [(TransactionKind, &str, &str, f64); 4] = [
    (TransactionKind::Income, "salary", "salario", 2500.0),
    (TransactionKind::Expense, "food", "alimentación", 300.0),
    (TransactionKind::Expense, "transportation", "transporte", 150.0),
    (TransactionKind::Expense, "entertainment", "ocio", 200.0),
];

/// Record the examples, report on them, save both formats into `dir` and
/// reload from JSON
pub fn handle_demo(dir: &Path, locale: Locale, symbol: &str) -> LedgerResult<()> {
    let mut ledger = Ledger::with_locale(locale);
    for (kind, english, spanish, amount) in EXAMPLES {
        let category = match locale {
            Locale::English => english,
            Locale::Spanish => spanish,
        };
        ledger.add(kind.token(locale), category, amount)?;
    }

    println!("{}", format_balance(&ledger, symbol));
    println!();
    print!("{}", format_summary(&ledger, symbol));

    let json_path = dir.join(FileFormat::Json.default_file_name(locale));
    let csv_path = dir.join(FileFormat::Csv.default_file_name(locale));

    ledger.save_json(&json_path)?;
    println!("Data saved to {}", json_path.display());
    ledger.save_csv(&csv_path)?;
    println!("Data saved to {}", csv_path.display());

    println!();
    println!("--- Reloading from file ---");
    let mut reloaded = Ledger::with_locale(locale);
    reloaded.load_json(&json_path)?;
    println!("Data loaded from {}", json_path.display());
    println!("{}", format_balance(&reloaded, symbol));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_demo_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        handle_demo(temp_dir.path(), Locale::English, "$").unwrap();

        let mut from_csv = Ledger::new();
        from_csv
            .load_csv(temp_dir.path().join("transactions.csv"))
            .unwrap();
        assert_eq!(from_csv.balance(), 1850.0);
        assert!(temp_dir.path().join("transactions.json").exists());
    }

    #[test]
    fn test_demo_spanish() {
        let temp_dir = TempDir::new().unwrap();
        handle_demo(temp_dir.path(), Locale::Spanish, "$").unwrap();

        let mut ledger = Ledger::with_locale(Locale::Spanish);
        ledger
            .load_json(temp_dir.path().join("movimientos.json"))
            .unwrap();
        assert_eq!(ledger.summary_by_category()["alimentación"], 300.0);
    }
}
