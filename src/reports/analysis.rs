//! Savings and investment analysis reports
//!
//! Text renderings of a successful prediction for the terminal.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::analysis::Prediction;
use crate::models::Transaction;

const WIDTH: usize = 60;

/// Savings-focused report: profile, savings tips, investment tips
#[derive(Debug, Clone)]
pub struct SavingsReport<'a> {
    prediction: &'a Prediction,
}

impl<'a> SavingsReport<'a> {
    pub fn new(prediction: &'a Prediction) -> Self {
        Self { prediction }
    }

    pub fn format_terminal(&self) -> String {
        let p = self.prediction;
        let mut output = String::new();

        output.push_str("AI Analysis Result\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push_str("\n\n");

        output.push_str(&format!("📊 Your Financial Profile: {}\n\n", p.profile_name));

        output.push_str("💡 Savings Recommendations:\n");
        push_lines(&mut output, &p.suggestions.savings_tips);
        output.push('\n');

        output.push_str("📈 Investment Suggestions:\n");
        push_lines(&mut output, &p.suggestions.investment_tips);
        output.push('\n');

        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');
        output.push_str("Analysis powered by a trained random forest model\n");

        output
    }
}

/// Investment-focused report with balance, rates and a roadmap
#[derive(Debug, Clone)]
pub struct InvestmentReport<'a> {
    prediction: &'a Prediction,
    currency: &'a str,
    months: usize,
}

impl<'a> InvestmentReport<'a> {
    /// Build the report; the transactions are used to count covered months
    pub fn new(prediction: &'a Prediction, transactions: &[Transaction], currency: &'a str) -> Self {
        Self {
            prediction,
            currency,
            months: months_covered(transactions),
        }
    }

    /// Balance spread over the months the transactions cover
    pub fn estimated_monthly_savings(&self) -> f64 {
        self.prediction.summary.balance / self.months as f64
    }

    pub fn format_terminal(&self) -> String {
        let p = self.prediction;
        let s = &p.summary;
        let c = self.currency;
        let mut output = String::new();

        output.push_str("AI Investment Analysis\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push_str("\n\n");

        output.push_str(&format!("📊 Your Financial Profile: {}\n", p.profile_name));
        output.push_str(&format!("💰 Current Balance: {}{:.2}\n", c, s.balance));
        output.push_str(&format!("💵 Total Income: {}{:.2}\n", c, s.total_income));
        output.push_str(&format!("📉 Total Expenses: {}{:.2}\n", c, s.total_expenses));
        output.push_str(&format!("📈 Savings Rate: {:.1}%\n", s.savings_rate_pct));
        output.push_str(&format!(
            "🗓️ Estimated Monthly Savings: {}{:.2} (over {} month{})\n\n",
            c,
            self.estimated_monthly_savings(),
            self.months,
            if self.months == 1 { "" } else { "s" }
        ));

        output.push_str("🚀 Personalized Investment Roadmap:\n");
        push_lines(&mut output, &p.suggestions.investment_tips);
        output.push('\n');

        output.push_str("💡 Additional Savings Tips:\n");
        let first_two: Vec<String> = p.suggestions.savings_tips.iter().take(2).cloned().collect();
        push_lines(&mut output, &first_two);
        output.push('\n');

        output.push_str(&"-".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Powered by a trained random forest model analyzing {} transactions\n",
            p.transaction_count
        ));

        output
    }
}

/// Number of distinct year-months among dated transactions, at least one
pub fn months_covered(transactions: &[Transaction]) -> usize {
    let months: BTreeSet<(i32, u32)> = transactions
        .iter()
        .filter_map(|t| t.date)
        .map(|d| (d.year(), d.month()))
        .collect();
    months.len().max(1)
}

fn push_lines(output: &mut String, lines: &[String]) {
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
}
