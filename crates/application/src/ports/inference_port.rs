//! Inference port - Interface to the text-generation service

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if available)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for inference operations
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Send one prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Get the name of the configured model
    fn current_model(&self) -> String;
}
