//! Export module for Budget Buddy
//!
//! Writes result payloads in machine-readable formats:
//! - JSON: the structured success or failure payload
//! - YAML: the same payload, human-readable

pub mod json;
pub mod yaml;

pub use json::export_json;
pub use yaml::export_yaml;
