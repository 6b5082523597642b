//! Display formatting for terminal output
//!
//! Provides utilities for formatting analysis results for terminal display.

pub mod breakdown;

pub use breakdown::{format_breakdown_table, format_features, format_summary};
