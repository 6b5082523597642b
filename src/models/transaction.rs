//! Transaction model
//!
//! Transactions are supplied by the caller and are read-only to the analysis
//! engine: it only aggregates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::SpendingCategory;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse from text ("income" / "expense", any case)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category as free text
    pub category: String,

    /// Amount (non-negative)
    pub amount: f64,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional transaction date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionType, category: impl Into<String>, amount: f64) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            description: None,
            date: None,
        }
    }

    /// Create an income transaction
    pub fn income(category: impl Into<String>, amount: f64) -> Self {
        Self::new(TransactionType::Income, category, amount)
    }

    /// Create an expense transaction
    pub fn expense(category: impl Into<String>, amount: f64) -> Self {
        Self::new(TransactionType::Expense, category, amount)
    }

    /// Set the transaction date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// The known category this transaction counts towards
    pub fn spending_category(&self) -> SpendingCategory {
        SpendingCategory::from_label(&self.category)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NotFinite);
        }
        if self.amount < 0.0 {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

/// Income and expense totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

impl Totals {
    /// Sum amounts per transaction type
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(Self::default(), |mut acc, t| {
            match t.kind {
                TransactionType::Income => acc.income += t.amount,
                TransactionType::Expense => acc.expenses += t.amount,
            }
            acc
        })
    }

    /// Income minus expenses
    pub fn balance(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NegativeAmount(f64),
    NotFinite,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::NotFinite => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
