//! Custom error types for Budget Buddy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use serde::Serialize;
use thiserror::Error;

/// The main error type for Budget Buddy operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// No fitted classifier in memory and no artifact on disk
    #[error("Model not trained. Run 'budget-buddy model train' first!")]
    ModelNotTrained,

    /// Prediction was requested for an empty transaction list
    #[error("No transactions found. Add transactions first!")]
    NoTransactions,

    /// The persisted model artifact could not be read back
    #[error("Model artifact is unreadable, retrain required: {0}")]
    Serialization(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// An error already rendered into a failure payload
    #[error("{message}")]
    Reported { kind: ErrorKind, message: String },
}

/// Machine-readable error kind carried in failure payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ModelNotTrained,
    NoTransactions,
    Serialization,
    Config,
    Io,
    Json,
    Validation,
    Import,
    Export,
    Storage,
}

impl BudgetError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ModelNotTrained => ErrorKind::ModelNotTrained,
            Self::NoTransactions => ErrorKind::NoTransactions,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::Json(_) => ErrorKind::Json,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Import(_) => ErrorKind::Import,
            Self::Export(_) => ErrorKind::Export,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Reported { kind, .. } => *kind,
        }
    }

    /// Check if the caller can recover by training the model
    pub fn needs_training(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::ModelNotTrained | ErrorKind::Serialization
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Budget Buddy operations
pub type BudgetResult<T> = Result<T, BudgetError>;
