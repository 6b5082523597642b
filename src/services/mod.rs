//! Service layer for Budget Buddy
//!
//! Loading transaction files into the data model.

pub mod import;

pub use import::{load_transactions, parse_csv, parse_json, ColumnMapping, ImportFormat};
