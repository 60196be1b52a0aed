//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No API key was configured
    #[error("Missing API key for the generative language service")]
    MissingApiKey,

    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service rejected the credential
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Model not found or no longer served
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Response parsing failed or carried no text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timed out: {0}")]
    Timeout(String),

    /// Quota or rate limit exceeded
    #[error("Quota exceeded: {0}")]
    RateLimited(String),

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
