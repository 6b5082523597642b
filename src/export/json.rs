//! JSON output for result payloads

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};

/// Write a payload as JSON followed by a newline
pub fn export_json<W: Write, T: Serialize>(
    payload: &T,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, payload)
    } else {
        serde_json::to_writer(&mut *writer, payload)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Outcome;

    #[test]
    fn test_export_failure_payload() {
        let outcome: Outcome<()> = Outcome::from(Err(BudgetError::NoTransactions));
        let mut buffer = Vec::new();
        export_json(&outcome, &mut buffer, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errorKind"], "no_transactions");
        assert_eq!(
            value["error"],
            "No transactions found. Add transactions first!"
        );
    }

    #[test]
    fn test_export_pretty() {
        let mut buffer = Vec::new();
        export_json(&serde_json::json!({"a": 1}), &mut buffer, true).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
