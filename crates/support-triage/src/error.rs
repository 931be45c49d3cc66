//! Error types for the triage pipeline

use thiserror::Error;

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

/// Errors surfaced at the triage boundary.
///
/// The pipeline stages themselves are total; only input validation and
/// configuration loading can fail.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The query handed to the entry point was not a string
    #[error("Invalid input type: expected a string query, found {found}")]
    InvalidInputType {
        /// JSON kind of the rejected value
        found: &'static str,
    },

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl TriageError {
    /// Create an invalid input error naming the kind of the rejected value
    pub fn invalid_input(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self::InvalidInputType { found }
    }
}
