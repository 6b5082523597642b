//! Storage layer for Budget Buddy
//!
//! JSON file storage with atomic writes for the classifier artifact.

pub mod file_io;
pub mod model;

pub use file_io::{read_json_optional, write_json_atomic};
pub use model::{ModelArtifact, ModelStore};
