//! CLI command for the financial summary
//!
//! Shows totals, the category breakdown and the classifier input for a
//! transaction file without touching the model.

use std::path::Path;

use crate::analysis::{aggregate, FeatureVector};
use crate::config::Settings;
use crate::display::{format_breakdown_table, format_features, format_summary};
use crate::error::BudgetResult;

use super::suggest::load_with_totals;

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, file: &Path) -> BudgetResult<()> {
    let (transactions, totals) = load_with_totals(file)?;
    let (summary, breakdown) = aggregate(&transactions, totals.income, totals.expenses);
    let currency = &settings.currency_symbol;

    println!("Financial Summary ({} transactions)", transactions.len());
    println!("{}", "=".repeat(40));
    print!("{}", format_summary(&summary, currency));
    println!();
    println!("{}", format_breakdown_table(&breakdown, &summary, currency));
    println!();
    println!("Classifier features:");
    print!("{}", format_features(&FeatureVector::from(&summary)));

    Ok(())
}
