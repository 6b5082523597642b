//! Budget Buddy - budget health classification and savings advice
//!
//! This library classifies a user's finances into one of five budget-health
//! tiers with a small random forest trained on a fixed table of archetypes,
//! then generates tier-specific savings and investment advice.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transactions and spending categories
//! - `analysis`: Aggregation, the classifier and advice generation
//! - `storage`: Model artifact persistence
//! - `services`: Transaction file import
//! - `reports`, `display`, `export`: Rendering results
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_buddy::analysis::BudgetAi;
//! use budget_buddy::config::{BuddyPaths, Settings};
//! use budget_buddy::models::{Totals, Transaction};
//!
//! let paths = BuddyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let engine = BudgetAi::from_config(&paths, &settings);
//! engine.train()?;
//!
//! let transactions = vec![
//!     Transaction::income("Salary", 1000.0),
//!     Transaction::expense("Food", 250.0),
//! ];
//! let totals = Totals::from_transactions(&transactions);
//! let prediction = engine.predict_and_suggest(&transactions, totals.income, totals.expenses)?;
//! println!("{}", prediction.profile_name);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
