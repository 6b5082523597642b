//! Core data models for Budget Buddy
//!
//! Transactions as supplied by the caller and the fixed set of spending
//! categories the analysis engine understands.

pub mod category;
pub mod transaction;

pub use category::SpendingCategory;
pub use transaction::{Totals, Transaction, TransactionType, TransactionValidationError};
