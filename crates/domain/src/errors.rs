//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A dollar amount could not be read as a whole number
    #[error("Invalid amount for {field}: {value:?}")]
    InvalidAmount { field: String, value: String },

    /// Session identifier was malformed
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid amount error
    pub fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value: value.into(),
        }
    }
}
