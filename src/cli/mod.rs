//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the analysis engine.

pub mod model;
pub mod output;
pub mod suggest;
pub mod summary;

pub use model::{handle_model_command, ModelCommands};
pub use output::{emit_outcome, OutputFormat};
pub use suggest::{handle_suggest_command, ReportKind, SuggestArgs};
pub use summary::handle_summary_command;
