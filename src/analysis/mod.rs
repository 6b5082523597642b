//! Financial analysis for Budget Buddy
//!
//! Turns a transaction list into a financial summary, classifies it into a
//! health tier with a random forest, and generates tier-specific advice.

pub mod advice;
pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod features;
pub mod forest;
pub mod tier;
pub mod training_data;

pub use advice::{AdviceGenerator, Suggestions};
pub use aggregator::{aggregate, FinancialSummary, SpendingBreakdown};
pub use classifier::{Classifier, ModelStatus, TrainingReport};
pub use engine::{BudgetAi, Failure, Outcome, Prediction, Trained};
pub use features::FeatureVector;
pub use forest::RandomForest;
pub use tier::Tier;
