//! CLI commands for the classifier model
//!
//! Training writes the artifact; status reports what is in memory and on disk.

use clap::Subcommand;

use super::output::{emit_outcome, OutputFormat};
use crate::analysis::BudgetAi;
use crate::error::BudgetResult;

/// Model subcommands
#[derive(Subcommand, Debug)]
pub enum ModelCommands {
    /// Fit the classifier on the built-in training table and save it
    Train {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show whether a trained model is available
    Status,
}

/// Handle model commands
pub fn handle_model_command(engine: &BudgetAi, cmd: ModelCommands) -> BudgetResult<()> {
    match cmd {
        ModelCommands::Train { format, pretty } => {
            let outcome = engine.train_outcome();
            if format != OutputFormat::Text {
                return emit_outcome(outcome, format, pretty);
            }

            let trained = outcome.into_result()?;
            println!("{}", trained.message);
            println!(
                "  Trees: {}  Training examples: {}",
                trained.report.trees, trained.report.examples
            );
        }
        ModelCommands::Status => {
            // Pull the artifact in so the status reflects what a prediction would use
            let ready = engine.classifier().is_ready()?;
            let status = engine.status()?;

            println!("Model Status");
            println!("============");
            println!("Artifact:  {}", status.artifact_path.display());
            println!(
                "Trained:   {}",
                if ready { "yes" } else { "no (run 'budget-buddy model train')" }
            );
            if let Some(trees) = status.trees {
                println!("Trees:     {}", trees);
            }
            if let Some(trained_at) = status.trained_at {
                println!("Fitted at: {}", trained_at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
    }

    Ok(())
}
