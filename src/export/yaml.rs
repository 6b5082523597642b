//! YAML output for result payloads
//!
//! Writes a short comment header ahead of the document.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};

/// Write a payload as YAML with a generated-at header
pub fn export_yaml<W: Write, T: Serialize>(payload: &T, writer: &mut W) -> BudgetResult<()> {
    let export_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# Budget Buddy analysis").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", Utc::now()).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION")).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, payload).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
