//! Output format shared by commands that can emit structured payloads

use std::io;

use clap::ValueEnum;
use serde::Serialize;

use crate::analysis::Outcome;
use crate::error::BudgetResult;
use crate::export::{export_json, export_yaml};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal report
    Text,
    /// Structured JSON payload
    Json,
    /// Structured YAML payload
    Yaml,
}

/// Write a success or failure payload to stdout
///
/// Failures are written like successes; the returned result then carries the
/// error so the process still exits non-zero.
pub fn emit_outcome<T: Serialize>(
    outcome: Outcome<T>,
    format: OutputFormat,
    pretty: bool,
) -> BudgetResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Yaml => export_yaml(&outcome, &mut handle)?,
        OutputFormat::Json | OutputFormat::Text => export_json(&outcome, &mut handle, pretty)?,
    }
    outcome.into_result().map(|_| ())
}
