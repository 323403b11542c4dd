//! Transaction model
//!
//! Represents a single income or expense entry. A `Transaction` can only be
//! obtained through a validating constructor, and it has no setters.

use std::fmt;

use super::locale::Locale;
use super::record::TransactionRecord;
use crate::error::{LedgerError, LedgerResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse a kind token using the locale's vocabulary
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(token: &str, locale: Locale) -> LedgerResult<Self> {
        if token == locale.income_token() {
            Ok(Self::Income)
        } else if token == locale.expense_token() {
            Ok(Self::Expense)
        } else {
            Err(LedgerError::InvalidTransactionKind {
                kind: token.to_string(),
                income: locale.income_token(),
                expense: locale.expense_token(),
            })
        }
    }

    /// The token for this kind in the given locale
    pub fn token(&self, locale: Locale) -> &'static str {
        match self {
            Self::Income => locale.income_token(),
            Self::Expense => locale.expense_token(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A validated financial transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    category: String,
    amount: f64,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveAmount` if `amount` is zero, negative or NaN, and
    /// `NonFiniteAmount` if it is infinite.
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> LedgerResult<Self> {
        validate_amount(amount)?;

        Ok(Self {
            kind,
            category: category.into(),
            amount,
        })
    }

    /// Create a transaction from a textual kind token
    ///
    /// The kind is checked before the amount.
    pub fn parse(
        token: &str,
        category: impl Into<String>,
        amount: f64,
        locale: Locale,
    ) -> LedgerResult<Self> {
        let kind = TransactionKind::parse(token, locale)?;
        Self::new(kind, category, amount)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Flatten into the 3-field record used by the file encoders
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            kind: self.kind,
            category: self.category.clone(),
            amount: self.amount,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Self::new(record.kind, record.category, record.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.kind, self.category, self.amount)
    }
}

fn validate_amount(amount: f64) -> LedgerResult<()> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(LedgerError::NonPositiveAmount { amount });
    }
    if amount.is_infinite() {
        return Err(LedgerError::NonFiniteAmount { amount });
    }
    Ok(())
}
