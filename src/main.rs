use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budget_buddy::analysis::BudgetAi;
use budget_buddy::cli::{
    handle_model_command, handle_suggest_command, handle_summary_command, ModelCommands,
    SuggestArgs,
};
use budget_buddy::config::{BuddyPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget-buddy",
    version,
    about = "Budget health classification and savings advice",
    long_about = "Budget Buddy classifies your finances into one of five health tiers \
                  with a locally trained random forest and turns the result into \
                  savings and investment advice."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classifier model commands
    #[command(subcommand)]
    Model(ModelCommands),

    /// Classify a transaction file and print advice
    Suggest(SuggestArgs),

    /// Show totals and the spending breakdown for a transaction file
    Summary {
        /// Transaction file (JSON array or CSV)
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = BuddyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let engine = BudgetAi::from_config(&paths, &settings);

    match cli.command {
        Some(Commands::Model(cmd)) => handle_model_command(&engine, cmd)?,
        Some(Commands::Suggest(args)) => handle_suggest_command(&engine, &settings, args)?,
        Some(Commands::Summary { file }) => handle_summary_command(&settings, &file)?,
        Some(Commands::Config) => {
            println!("Budget Buddy Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Model artifact: {}", paths.model_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Trees:             {}", settings.forest.n_trees);
            println!("  Max depth:         {}", settings.forest.max_depth);
            println!("  Min samples split: {}", settings.forest.min_samples_split);
            println!("  Seed:              {}", settings.forest.seed);
        }
        None => {
            println!("Budget Buddy - budget health classification and advice");
            println!();
            println!("Run 'budget-buddy --help' for usage information.");
            println!("Run 'budget-buddy model train' to train the classifier.");
        }
    }

    Ok(())
}
