//! Spending breakdown display formatting
//!
//! Formats the per-category breakdown and the financial summary for
//! terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::analysis::features::FEATURE_NAMES;
use crate::analysis::{FeatureVector, FinancialSummary, SpendingBreakdown};

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "% of Income")]
    share: String,
}

/// Format the breakdown as a table, one row per category
pub fn format_breakdown_table(
    breakdown: &SpendingBreakdown,
    summary: &FinancialSummary,
    currency: &str,
) -> String {
    let rows: Vec<BreakdownRow> = breakdown
        .iter()
        .map(|(category, amount)| BreakdownRow {
            category: category.to_string(),
            amount: format!("{}{:.2}", currency, amount),
            share: format!("{:.1}%", summary.share_of_income(amount)),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Format the totals and derived rates
pub fn format_summary(summary: &FinancialSummary, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total Income:    {}{:.2}\n",
        currency, summary.total_income
    ));
    output.push_str(&format!(
        "Total Expenses:  {}{:.2}\n",
        currency, summary.total_expenses
    ));
    output.push_str(&format!("Balance:         {}{:.2}\n", currency, summary.balance));
    output.push_str(&format!("Savings Rate:    {:.1}%\n", summary.savings_rate_pct));
    output.push_str(&format!("Expense Ratio:   {:.1}%\n", summary.expense_ratio_pct));
    output
}

/// Format the classifier input, one named feature per line
pub fn format_features(features: &FeatureVector) -> String {
    let name_width = FEATURE_NAMES.iter().map(|n| n.len()).max().unwrap_or(0);

    FEATURE_NAMES
        .iter()
        .zip(features.as_slice())
        .map(|(name, value)| format!("  {:<width$}  {:>8.2}\n", name, value, width = name_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate;
    use crate::models::Transaction;

    fn analyzed() -> (FinancialSummary, SpendingBreakdown) {
        let transactions = vec![
            Transaction::income("Salary", 1000.0),
            Transaction::expense("Food", 250.0),
            Transaction::expense("Bills", 100.0),
        ];
        aggregate(&transactions, 1000.0, 350.0)
    }

    #[test]
    fn test_breakdown_table_lists_every_category() {
        let (summary, breakdown) = analyzed();
        let table = format_breakdown_table(&breakdown, &summary, "$");

        assert!(table.contains("Category"));
        assert!(table.contains("% of Income"));
        assert!(table.contains("$250.00"));
        assert!(table.contains("25.0%"));
        for name in ["Food", "Transport", "Healthcare", "Other"] {
            assert!(table.contains(name));
        }
    }

    #[test]
    fn test_summary_lines() {
        let (summary, _) = analyzed();
        let text = format_summary(&summary, "₹");

        assert!(text.contains("Balance:         ₹650.00"));
        assert!(text.contains("Savings Rate:    65.0%"));
        assert!(text.contains("Expense Ratio:   35.0%"));
    }

    #[test]
    fn test_features_named() {
        let (summary, _) = analyzed();
        let text = format_features(&FeatureVector::from(&summary));

        assert_eq!(text.lines().count(), FEATURE_NAMES.len());
        assert!(text.contains(FEATURE_NAMES[0]));
        assert!(text.contains("65.00"));
    }
}
