//! The ledger: an ordered set of transactions with queries and persistence
//!
//! Transactions enter only through validated construction, so every element
//! of a `Ledger` satisfies the transaction invariant. Loads decode into a
//! fresh sequence and replace the current one only when every record is
//! valid; a failed load leaves the ledger as it was.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Locale, Transaction, TransactionKind, TransactionRecord};
use crate::storage::{self, FileFormat};

/// Result of a load that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The source existed and this many transactions were loaded
    Loaded { count: usize },
    /// The source did not exist; the ledger was reset to empty
    NotFound,
}

impl LoadOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Number of transactions now in the ledger
    pub fn count(&self) -> usize {
        match self {
            Self::Loaded { count } => *count,
            Self::NotFound => 0,
        }
    }
}

/// In-memory ledger of income and expense transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    locale: Locale,
}

impl Ledger {
    /// Create an empty ledger using the English vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that reads and writes the given locale
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            transactions: Vec::new(),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Remove every transaction
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// Record a new transaction from a kind token in the ledger's locale
    ///
    /// On error the ledger is unchanged.
    pub fn add(
        &mut self,
        kind: &str,
        category: impl Into<String>,
        amount: f64,
    ) -> LedgerResult<()> {
        let transaction = Transaction::parse(kind, category, amount, self.locale)?;
        self.add_transaction(transaction);
        Ok(())
    }

    /// Append an already validated transaction
    pub fn add_transaction(&mut self, transaction: Transaction) {
        debug!(
            kind = %transaction.kind(),
            category = transaction.category(),
            amount = transaction.amount(),
            "Adding transaction"
        );
        self.transactions.push(transaction);
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> f64 {
        self.total_for(TransactionKind::Income)
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> f64 {
        self.total_for(TransactionKind::Expense)
    }

    /// Income minus expenses; 0 for an empty ledger
    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    fn total_for(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }

    /// Expense totals keyed by exact category text
    ///
    /// Income is ignored and categories without expenses are absent.
    pub fn summary_by_category(&self) -> HashMap<String, f64> {
        let mut summary: HashMap<String, f64> = HashMap::new();
        for txn in self.transactions.iter().filter(|t| t.is_expense()) {
            *summary.entry(txn.category().to_string()).or_insert(0.0) += txn.amount();
        }
        summary
    }

    /// Flat records in ledger order
    pub fn records(&self) -> Vec<TransactionRecord> {
        self.transactions.iter().map(Transaction::to_record).collect()
    }

    // ==================== Persistence ====================

    /// Save every transaction to `path` in the given format
    pub fn save<P: AsRef<Path>>(&self, path: P, format: FileFormat) -> LedgerResult<()> {
        let path = path.as_ref();
        storage::write_records(path, format, self.locale, &self.records())?;

        info!(
            path = %path.display(),
            %format,
            count = self.transactions.len(),
            "Saved ledger"
        );
        Ok(())
    }

    /// Replace the ledger with the contents of `path`
    ///
    /// A missing file resets the ledger to empty and returns
    /// `LoadOutcome::NotFound`. Any other failure returns an error and keeps
    /// the current transactions.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: FileFormat,
    ) -> LedgerResult<LoadOutcome> {
        let path = path.as_ref();

        let records = match storage::read_records(path, format, self.locale) {
            Ok(records) => records,
            Err(LedgerError::SourceNotFound { path }) => {
                warn!(path = %path.display(), %format, "No ledger file found, starting empty");
                self.transactions.clear();
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => return Err(e),
        };

        let transactions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Transaction::try_from(record).map_err(|e| LedgerError::in_record(index, e))
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let count = transactions.len();
        self.transactions = transactions;

        info!(path = %path.display(), %format, count, "Loaded ledger");
        Ok(LoadOutcome::Loaded { count })
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> LedgerResult<()> {
        self.save(path, FileFormat::Json)
    }

    pub fn load_json<P: AsRef<Path>>(&mut self, path: P) -> LedgerResult<LoadOutcome> {
        self.load(path, FileFormat::Json)
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> LedgerResult<()> {
        self.save(path, FileFormat::Csv)
    }

    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> LedgerResult<LoadOutcome> {
        self.load(path, FileFormat::Csv)
    }

    /// Save to the locale's default file for `format` in the data directory
    pub fn save_default(&self, paths: &LedgerPaths, format: FileFormat) -> LedgerResult<()> {
        self.save(paths.ledger_file(format, self.locale), format)
    }

    /// Load from the locale's default file for `format` in the data directory
    pub fn load_default(
        &mut self,
        paths: &LedgerPaths,
        format: FileFormat,
    ) -> LedgerResult<LoadOutcome> {
        let path = paths.ledger_file(format, self.locale);
        self.load(path, format)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
