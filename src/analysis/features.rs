//! Classifier input
//!
//! The field order of [`FeatureVector`] is the classifier's input contract:
//! savings rate, food, entertainment, transport, expense ratio.

use serde::{Deserialize, Serialize};

use super::aggregator::FinancialSummary;

/// Number of features the classifier consumes
pub const FEATURE_COUNT: usize = 5;

/// Feature names in input order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "savings_rate_pct",
    "food_pct",
    "entertainment_pct",
    "transport_pct",
    "expense_ratio_pct",
];

/// Ordered 5-dimensional classifier input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const fn new(
        savings_rate_pct: f64,
        food_pct: f64,
        entertainment_pct: f64,
        transport_pct: f64,
        expense_ratio_pct: f64,
    ) -> Self {
        Self([
            savings_rate_pct,
            food_pct,
            entertainment_pct,
            transport_pct,
            expense_ratio_pct,
        ])
    }

    /// Value of the feature at `index`
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<&FinancialSummary> for FeatureVector {
    fn from(summary: &FinancialSummary) -> Self {
        Self::new(
            summary.savings_rate_pct,
            summary.food_pct,
            summary.entertainment_pct,
            summary.transport_pct,
            summary.expense_ratio_pct,
        )
    }
}
