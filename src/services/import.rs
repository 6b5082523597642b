//! Transaction import service
//!
//! Loads a transaction list from a JSON array or a CSV file. CSV files need a
//! header naming at least `type`, `category` and `amount`; `description` and
//! `date` are picked up when present. Any bad row fails the whole import.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Transaction, TransactionType};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Pick a format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Column positions resolved from a CSV header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub type_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
    pub description_column: Option<usize>,
    pub date_column: Option<usize>,
}

impl ColumnMapping {
    /// Resolve columns by header name, ignoring case
    pub fn from_headers(headers: &StringRecord) -> BudgetResult<Self> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, h)| (h.trim().to_lowercase(), idx))
            .collect();

        let required = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| BudgetError::Import(format!("Missing '{}' column in header", name)))
        };

        Ok(Self {
            type_column: required("type")?,
            category_column: required("category")?,
            amount_column: required("amount")?,
            description_column: index.get("description").copied(),
            date_column: index.get("date").copied(),
        })
    }
}

/// Read transactions from a file, choosing the format by extension
pub fn load_transactions(path: &Path) -> BudgetResult<Vec<Transaction>> {
    if !path.exists() {
        return Err(BudgetError::Import(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| BudgetError::Import(format!("Failed to read file: {}", e)))?;

    let format = ImportFormat::from_path(path);
    let transactions = match format {
        ImportFormat::Json => parse_json(&content)?,
        ImportFormat::Csv => parse_csv(&content)?,
    };

    debug!(
        path = %path.display(),
        ?format,
        count = transactions.len(),
        "Loaded transactions"
    );
    Ok(transactions)
}

/// Parse a JSON array of transactions
pub fn parse_json(content: &str) -> BudgetResult<Vec<Transaction>> {
    let transactions: Vec<Transaction> = serde_json::from_str(content)
        .map_err(|e| BudgetError::Import(format!("Invalid transaction JSON: {}", e)))?;

    for (idx, transaction) in transactions.iter().enumerate() {
        transaction
            .validate()
            .map_err(|e| BudgetError::Import(format!("Transaction {}: {}", idx + 1, e)))?;
    }

    Ok(transactions)
}

/// Parse CSV content with a header row
pub fn parse_csv(content: &str) -> BudgetResult<Vec<Transaction>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| BudgetError::Import(format!("Error reading CSV header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut transactions = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result
            .map_err(|e| BudgetError::Import(format!("Row {}: error reading record: {}", row, e)))?;
        let transaction = parse_record(&record, &mapping)
            .map_err(|e| BudgetError::Import(format!("Row {}: {}", row, e)))?;
        transactions.push(transaction);
    }

    Ok(transactions)
}

fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<Transaction, String> {
    let field = |col: usize, name: &str| {
        record
            .get(col)
            .ok_or_else(|| format!("Missing {} value", name))
    };

    let kind_str = field(mapping.type_column, "type")?;
    let kind = TransactionType::parse(kind_str)
        .ok_or_else(|| format!("Unknown transaction type '{}'", kind_str))?;

    let category = field(mapping.category_column, "category")?;

    let amount_str = field(mapping.amount_column, "amount")?;
    let amount: f64 = amount_str
        .parse()
        .map_err(|_| format!("Invalid amount '{}'", amount_str))?;

    let mut transaction = Transaction::new(kind, category, amount);
    transaction.validate().map_err(|e| e.to_string())?;

    if let Some(description) = mapping
        .description_column
        .and_then(|col| record.get(col))
        .filter(|s| !s.is_empty())
    {
        transaction = transaction.with_description(description);
    }

    if let Some(date_str) = mapping
        .date_column
        .and_then(|col| record.get(col))
        .filter(|s| !s.is_empty())
    {
        transaction = transaction.with_date(parse_date(date_str)?);
    }

    Ok(transaction)
}

/// Parse a date string trying common formats
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let formats = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("Could not parse date: '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ImportFormat::from_path(Path::new("a.csv")), ImportFormat::Csv);
        assert_eq!(ImportFormat::from_path(Path::new("a.CSV")), ImportFormat::Csv);
        assert_eq!(ImportFormat::from_path(Path::new("a.json")), ImportFormat::Json);
        assert_eq!(ImportFormat::from_path(Path::new("a")), ImportFormat::Json);
    }

    #[test]
    fn test_parse_csv() {
        let csv = "type,category,amount,description,date\n\
                   income,Salary,1000,June pay,2025-06-01\n\
                   expense,Food,450,,2025-06-03\n\
                   Expense, Transport ,20.5,Bus,\n";
        let transactions = parse_csv(csv).unwrap();

        assert_eq!(transactions.len(), 3);
        assert!(transactions[0].is_income());
        assert_eq!(transactions[0].description.as_deref(), Some("June pay"));
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(transactions[1].description, None);
        assert_eq!(transactions[2].category, "Transport");
        assert_eq!(transactions[2].amount, 20.5);
        assert_eq!(transactions[2].date, None);
    }

    #[test]
    fn test_parse_csv_reordered_columns() {
        let csv = "Amount,Category,Type\n300,Bills,expense\n";
        let transactions = parse_csv(csv).unwrap();

        assert_eq!(transactions[0].category, "Bills");
        assert_eq!(transactions[0].amount, 300.0);
        assert!(transactions[0].is_expense());
    }

    #[test]
    fn test_parse_csv_rejects_bad_rows() {
        let negative = "type,category,amount\nincome,Salary,100\nexpense,Food,-5\n";
        let err = parse_csv(negative).unwrap_err();
        assert!(matches!(&err, BudgetError::Import(msg) if msg.starts_with("Row 2")));

        let not_numeric = "type,category,amount\nexpense,Food,lots\n";
        let err = parse_csv(not_numeric).unwrap_err();
        assert!(err.to_string().contains("Invalid amount 'lots'"));

        let unknown_type = "type,category,amount\ntransfer,Food,5\n";
        let err = parse_csv(unknown_type).unwrap_err();
        assert!(err.to_string().contains("Unknown transaction type"));
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let err = parse_csv("type,amount\nexpense,5\n").unwrap_err();
        assert!(err.to_string().contains("'category'"));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"type": "income", "category": "Salary", "amount": 1000},
            {"type": "expense", "category": "Food", "amount": 450, "date": "2025-06-03"}
        ]"#;
        let transactions = parse_json(json).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].date, NaiveDate::from_ymd_opt(2025, 6, 3));
    }

    #[test]
    fn test_parse_json_rejects_negative() {
        let json = r#"[{"type": "expense", "category": "Food", "amount": -1}]"#;
        let err = parse_json(json).unwrap_err();
        assert!(err.to_string().contains("Transaction 1"));
    }

    #[test]
    fn test_load_transactions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("txns.csv");
        fs::write(&path, "type,category,amount\nincome,Salary,10\n").unwrap();

        assert_eq!(load_transactions(&path).unwrap().len(), 1);

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_transactions(&missing),
            Err(BudgetError::Import(_))
        ));
    }
}
