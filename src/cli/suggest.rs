//! CLI command for AI suggestions
//!
//! Loads a transaction file, runs the prediction and renders the result as a
//! text report or as a structured payload.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use super::output::{emit_outcome, OutputFormat};
use crate::analysis::{BudgetAi, Prediction};
use crate::config::Settings;
use crate::display::format_breakdown_table;
use crate::error::BudgetResult;
use crate::models::{Totals, Transaction};
use crate::reports::{InvestmentReport, SavingsReport};
use crate::services::import::load_transactions;

/// Text report variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Profile with savings and investment tips
    Savings,
    /// Balance, rates and an investment roadmap
    Investment,
}

/// Arguments for the suggest command
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Transaction file (JSON array or CSV)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report to show in text format
    #[arg(short, long, value_enum, default_value = "savings")]
    pub report: ReportKind,

    /// Also print the spending breakdown table (text format)
    #[arg(short, long)]
    pub breakdown: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the suggest command
pub fn handle_suggest_command(
    engine: &BudgetAi,
    settings: &Settings,
    args: SuggestArgs,
) -> BudgetResult<()> {
    let (transactions, totals) = load_with_totals(&args.file)?;
    let outcome = engine.suggest(&transactions, totals.income, totals.expenses);

    match args.format {
        OutputFormat::Text => {
            let prediction = outcome.into_result()?;
            print_text(&prediction, &transactions, settings, &args);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Yaml => emit_outcome(outcome, args.format, args.pretty),
    }
}

fn print_text(
    prediction: &Prediction,
    transactions: &[Transaction],
    settings: &Settings,
    args: &SuggestArgs,
) {
    let text = match args.report {
        ReportKind::Savings => SavingsReport::new(prediction).format_terminal(),
        ReportKind::Investment => {
            InvestmentReport::new(prediction, transactions, &settings.currency_symbol)
                .format_terminal()
        }
    };
    print!("{}", text);

    if args.breakdown {
        println!();
        println!(
            "{}",
            format_breakdown_table(
                &prediction.breakdown,
                &prediction.summary,
                &settings.currency_symbol
            )
        );
    }
}

/// Read a transaction file for commands that only need the numbers
pub fn load_with_totals(path: &Path) -> BudgetResult<(Vec<Transaction>, Totals)> {
    let transactions = load_transactions(path)?;
    let totals = Totals::from_transactions(&transactions);
    Ok((transactions, totals))
}
