//! Reports module for Budget Buddy
//!
//! Savings and investment analyses rendered from a prediction.

pub mod analysis;

pub use analysis::{months_covered, InvestmentReport, SavingsReport};
