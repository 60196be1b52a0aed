//! Gemini inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{
    GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the Gemini generative language service
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiInferenceEngine,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = GeminiInferenceEngine::new(config).map_err(|e| match e {
            InferenceError::MissingApiKey => {
                ApplicationError::Configuration(format!("{e} (inference.api_key)"))
            },
            other => Self::map_error(other),
        })?;

        Ok(Self { engine })
    }

    /// Convert ai_core error to application error, keeping the provider's text
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited(_) => ApplicationError::RateLimited(e.to_string()),
            InferenceError::ConnectionFailed(_)
            | InferenceError::Timeout(_)
            | InferenceError::RequestFailed(_) => ApplicationError::ExternalService(e.to_string()),
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::simple(prompt))
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms = latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}
