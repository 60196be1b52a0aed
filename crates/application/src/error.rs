//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error (network, timeout)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Provider quota or rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Session has not passed the access gate
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The analysis request could not be completed
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure of a single call to the text-generation service.
///
/// Every cause collapses into this one type; the display form is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An error occurred: {message}")]
pub struct DispatchError {
    message: String,
}

impl DispatchError {
    /// Create a dispatch error from the underlying failure text
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying failure text
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApplicationError> for DispatchError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Inference(msg)
            | ApplicationError::ExternalService(msg)
            | ApplicationError::RateLimited(msg) => Self::new(msg),
            ApplicationError::Dispatch(inner) => inner,
            other => Self::new(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_display_is_user_message() {
        let err = DispatchError::new("connection refused");
        assert_eq!(err.to_string(), "An error occurred: connection refused");
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn dispatch_error_keeps_inference_text() {
        let err = DispatchError::from(ApplicationError::Inference(
            "Quota exceeded: Resource has been exhausted".to_string(),
        ));
        assert_eq!(err.message(), "Quota exceeded: Resource has been exhausted");
    }

    #[test]
    fn dispatch_error_from_other_variants_uses_display() {
        let err = DispatchError::from(ApplicationError::Configuration("no key".to_string()));
        assert_eq!(err.message(), "Configuration error: no key");
    }

    #[test]
    fn dispatch_variant_is_transparent() {
        let err = ApplicationError::from(DispatchError::new("boom"));
        assert_eq!(err.to_string(), "An error occurred: boom");
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::ValidationError("bad".to_string()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }
}
