//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::expr::ExprError;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// The amount field failed the whitelist or did not parse
    #[error("Invalid expression '{input}': {source}")]
    InvalidExpression {
        input: String,
        #[source]
        source: ExprError,
    },

    /// The amount evaluated but is zero or negative
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),

    /// A required text field was left blank
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// Category already present in the category set
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Category still referenced by at least one expense
    #[error("Cannot remove category '{category}': used by {count} expense(s)")]
    CategoryInUse { category: String, count: usize },

    /// Category not present in the category set
    #[error("Category not found: {0}")]
    UnknownCategory(String),

    /// Positional removal outside the list
    #[error("No {kind} item at position {position} (list has {len})")]
    IndexOutOfRange {
        kind: &'static str,
        position: usize,
        len: usize,
    },

    /// Validation errors for calculator inputs and imported data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl TallyError {
    /// Wrap an evaluator rejection together with the offending input
    pub fn invalid_expression(input: impl Into<String>, source: ExprError) -> Self {
        Self::InvalidExpression {
            input: input.into(),
            source,
        }
    }

    /// Check if this error came from the amount field
    pub fn is_amount_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpression { .. } | Self::NonPositiveAmount(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TallyError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;
