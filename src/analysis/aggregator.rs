//! Spending aggregation
//!
//! Turns a transaction list plus caller-supplied totals into a
//! [`FinancialSummary`] and a per-category [`SpendingBreakdown`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{SpendingCategory, Transaction};

/// Accumulated expense amount per category
///
/// All eight categories are always present, defaulting to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<SpendingCategory, f64>",
    into = "BTreeMap<SpendingCategory, f64>"
)]
pub struct SpendingBreakdown {
    amounts: BTreeMap<SpendingCategory, f64>,
}

impl Default for SpendingBreakdown {
    fn default() -> Self {
        Self {
            amounts: SpendingCategory::ALL.into_iter().map(|c| (c, 0.0)).collect(),
        }
    }
}

impl From<BTreeMap<SpendingCategory, f64>> for SpendingBreakdown {
    fn from(partial: BTreeMap<SpendingCategory, f64>) -> Self {
        let mut breakdown = Self::default();
        breakdown.amounts.extend(partial);
        breakdown
    }
}

impl From<SpendingBreakdown> for BTreeMap<SpendingCategory, f64> {
    fn from(breakdown: SpendingBreakdown) -> Self {
        breakdown.amounts
    }
}

impl SpendingBreakdown {
    /// Amount spent in a category
    pub fn get(&self, category: SpendingCategory) -> f64 {
        self.amounts.get(&category).copied().unwrap_or(0.0)
    }

    /// Add an expense amount to a category
    pub fn add(&mut self, category: SpendingCategory, amount: f64) {
        *self.amounts.entry(category).or_insert(0.0) += amount;
    }

    /// Iterate categories in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (SpendingCategory, f64)> + '_ {
        self.amounts.iter().map(|(c, a)| (*c, *a))
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    /// The highest-spending category
    ///
    /// Ties resolve to the category that comes first in canonical order.
    pub fn largest(&self) -> (SpendingCategory, f64) {
        let mut best = (SpendingCategory::Food, self.get(SpendingCategory::Food));
        for (category, amount) in self.iter() {
            if amount > best.1 {
                best = (category, amount);
            }
        }
        best
    }
}

/// Derived snapshot of a user's finances
///
/// Percentages are relative to income. With no income the ratios fall back
/// to fixed values instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub savings_rate_pct: f64,
    pub expense_ratio_pct: f64,
    pub food_pct: f64,
    pub transport_pct: f64,
    pub entertainment_pct: f64,
}

impl FinancialSummary {
    /// Savings rate when there is no income
    pub const NO_INCOME_SAVINGS_RATE: f64 = -100.0;
    /// Expense ratio when there is no income
    pub const NO_INCOME_EXPENSE_RATIO: f64 = 100.0;

    /// Share of income spent in a category, as a percentage
    ///
    /// Returns 0 when there is no income.
    pub fn share_of_income(&self, amount: f64) -> f64 {
        if self.total_income > 0.0 {
            amount / self.total_income * 100.0
        } else {
            0.0
        }
    }
}

/// Aggregate transactions into a summary and breakdown
///
/// `total_income` and `total_expenses` are taken as given; only expense
/// transactions contribute to the breakdown.
pub fn aggregate(
    transactions: &[Transaction],
    total_income: f64,
    total_expenses: f64,
) -> (FinancialSummary, SpendingBreakdown) {
    let mut breakdown = SpendingBreakdown::default();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        breakdown.add(txn.spending_category(), txn.amount);
    }

    let balance = total_income - total_expenses;

    let summary = if total_income > 0.0 {
        let pct = |amount: f64| amount / total_income * 100.0;
        FinancialSummary {
            total_income,
            total_expenses,
            balance,
            savings_rate_pct: pct(balance),
            expense_ratio_pct: pct(total_expenses),
            food_pct: pct(breakdown.get(SpendingCategory::Food)),
            transport_pct: pct(breakdown.get(SpendingCategory::Transport)),
            entertainment_pct: pct(breakdown.get(SpendingCategory::Entertainment)),
        }
    } else {
        FinancialSummary {
            total_income,
            total_expenses,
            balance,
            savings_rate_pct: FinancialSummary::NO_INCOME_SAVINGS_RATE,
            expense_ratio_pct: FinancialSummary::NO_INCOME_EXPENSE_RATIO,
            food_pct: 0.0,
            transport_pct: 0.0,
            entertainment_pct: 0.0,
        }
    };

    (summary, breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Totals;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::income("Salary", 1000.0),
            Transaction::expense("Food", 250.0),
            Transaction::expense("Transport", 100.0),
            Transaction::expense("Entertainment", 50.0),
            Transaction::expense("Pets", 30.0),
            Transaction::expense("Bills", 70.0),
        ]
    }

    #[test]
    fn test_breakdown_has_all_categories() {
        let (_, breakdown) = aggregate(&[], 0.0, 0.0);
        assert_eq!(breakdown.iter().count(), 8);
        assert!(breakdown.iter().all(|(_, amount)| amount == 0.0));
    }

    #[test]
    fn test_breakdown_sums_to_expenses() {
        let transactions = sample_transactions();
        let totals = Totals::from_transactions(&transactions);
        let (summary, breakdown) = aggregate(&transactions, totals.income, totals.expenses);

        assert_eq!(breakdown.total(), summary.total_expenses);
        assert_eq!(breakdown.get(SpendingCategory::Other), 30.0);
        assert_eq!(breakdown.get(SpendingCategory::Food), 250.0);
    }

    #[test]
    fn test_income_is_not_counted_as_spending() {
        let transactions = vec![Transaction::income("Food", 500.0)];
        let (_, breakdown) = aggregate(&transactions, 500.0, 0.0);
        assert_eq!(breakdown.get(SpendingCategory::Food), 0.0);
    }

    #[test]
    fn test_percentages() {
        let transactions = sample_transactions();
        let (summary, _) = aggregate(&transactions, 1000.0, 500.0);

        assert_eq!(summary.balance, 500.0);
        assert_eq!(summary.savings_rate_pct, 50.0);
        assert_eq!(summary.expense_ratio_pct, 50.0);
        assert_eq!(summary.food_pct, 25.0);
        assert_eq!(summary.transport_pct, 10.0);
        assert_eq!(summary.entertainment_pct, 5.0);
    }

    #[test]
    fn test_zero_income_fallback() {
        let transactions = vec![Transaction::expense("Food", 80.0)];
        let (summary, breakdown) = aggregate(&transactions, 0.0, 80.0);

        assert_eq!(summary.savings_rate_pct, -100.0);
        assert_eq!(summary.expense_ratio_pct, 100.0);
        assert_eq!(summary.food_pct, 0.0);
        assert_eq!(summary.transport_pct, 0.0);
        assert_eq!(summary.entertainment_pct, 0.0);
        assert_eq!(summary.balance, -80.0);
        assert_eq!(breakdown.get(SpendingCategory::Food), 80.0);
    }

    #[test]
    fn test_negative_income_uses_fallback() {
        let (summary, _) = aggregate(&[], -10.0, 0.0);
        assert_eq!(summary.savings_rate_pct, -100.0);
        assert_eq!(summary.expense_ratio_pct, 100.0);
    }

    #[test]
    fn test_miscased_category_counts_as_other() {
        let transactions = vec![
            Transaction::income("Salary", 1000.0),
            Transaction::expense("food", 200.0),
            Transaction::expense("Food", 100.0),
        ];
        let (summary, breakdown) = aggregate(&transactions, 1000.0, 300.0);

        assert_eq!(breakdown.get(SpendingCategory::Food), 100.0);
        assert_eq!(breakdown.get(SpendingCategory::Other), 200.0);
        assert_eq!(summary.food_pct, 10.0);
    }

    #[test]
    fn test_largest_prefers_first_on_tie() {
        let mut breakdown = SpendingBreakdown::default();
        breakdown.add(SpendingCategory::Bills, 300.0);
        breakdown.add(SpendingCategory::Shopping, 300.0);
        breakdown.add(SpendingCategory::Food, 100.0);

        assert_eq!(breakdown.largest(), (SpendingCategory::Bills, 300.0));
    }

    #[test]
    fn test_breakdown_serializes_as_map() {
        let mut breakdown = SpendingBreakdown::default();
        breakdown.add(SpendingCategory::Food, 12.5);

        let value = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(value["Food"], 12.5);
        assert_eq!(value["Other"], 0.0);

        let partial: SpendingBreakdown = serde_json::from_str(r#"{"Bills": 4.0}"#).unwrap();
        assert_eq!(partial.get(SpendingCategory::Bills), 4.0);
        assert_eq!(partial.iter().count(), 8);
    }
}
