//! Generative Language client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

use super::wire::{Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Inference engine backed by the Generative Language API
#[derive(Debug)]
pub struct GeminiInferenceEngine {
    client: Client,
    config: InferenceConfig,
    api_key: SecretString,
}

impl GeminiInferenceEngine {
    /// Create a new engine.
    ///
    /// Fails with [`InferenceError::MissingApiKey`] when no non-empty key is
    /// configured, so a missing credential never reaches the network.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(InferenceError::MissingApiKey)?;

        let mut builder = Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Gemini inference engine"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the `generateContent` URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version.trim_matches('/'),
            model.trim_start_matches("models/")
        )
    }

    /// Turn a non-success HTTP response into an error carrying the provider's message
    fn map_status(status: StatusCode, body: &str) -> InferenceError {
        let (message, api_status) = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => (envelope.error.message, envelope.error.status),
            Err(_) => (body.trim().to_string(), None),
        };
        let message = if message.is_empty() {
            status.to_string()
        } else {
            message
        };

        // An invalid key comes back as 400 INVALID_ARGUMENT rather than 401
        let bad_key = api_status.as_deref() == Some("INVALID_ARGUMENT")
            && message.to_lowercase().contains("api key");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                InferenceError::AuthenticationFailed(message)
            },
            _ if bad_key => InferenceError::AuthenticationFailed(message),
            StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(message),
            StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited(message),
            _ => InferenceError::ServerError(format!("Status {status}: {message}")),
        }
    }
}

#[async_trait]
impl InferenceEngine for GeminiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let model = self.config.default_model.clone();

        let body = GenerateContentRequest {
            contents: request.messages.iter().map(Content::from).collect(),
        };

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url(&model))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Inference request failed");
            return Err(Self::map_status(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let Some(content) = parsed.first_candidate_text() else {
            let reason = parsed
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
                .or_else(|| {
                    parsed
                        .candidates
                        .first()
                        .and_then(|c| c.finish_reason.clone())
                })
                .unwrap_or_else(|| "no candidates".to_string());
            warn!(reason = %reason, "Response contained no text");
            return Err(InferenceError::InvalidResponse(format!(
                "response contained no text ({reason})"
            )));
        };

        let usage = parsed.usage_metadata.as_ref().map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        debug!(tokens = ?usage, "Inference completed");

        Ok(InferenceResponse {
            content,
            model: parsed.model_version.clone().unwrap_or(model),
            usage,
            finish_reason: parsed
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GeminiInferenceEngine {
        GeminiInferenceEngine::new(InferenceConfig::default().with_api_key("test-key")).unwrap()
    }

    #[test]
    fn builds_generate_url() {
        assert_eq!(
            engine().generate_url("gemini-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
        assert_eq!(
            engine().generate_url("models/gemini-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = GeminiInferenceEngine::new(InferenceConfig::default()).unwrap_err();
        assert!(matches!(err, InferenceError::MissingApiKey));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = GeminiInferenceEngine::new(InferenceConfig::default().with_api_key("  "))
            .unwrap_err();
        assert!(matches!(err, InferenceError::MissingApiKey));
    }

    #[test]
    fn default_model_comes_from_config() {
        assert_eq!(engine().default_model(), "gemini-pro");
    }

    #[test]
    fn map_status_reads_google_error_body() {
        let body = r#"{"error":{"code":404,"message":"models/gemini-pro is not found","status":"NOT_FOUND"}}"#;
        let err = GeminiInferenceEngine::map_status(StatusCode::NOT_FOUND, body);
        match err {
            InferenceError::ModelNotAvailable(msg) => {
                assert_eq!(msg, "models/gemini-pro is not found");
            },
            other => unreachable!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn map_status_treats_invalid_key_as_auth_failure() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = GeminiInferenceEngine::map_status(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, InferenceError::AuthenticationFailed(_)));
    }

    #[test]
    fn map_status_falls_back_to_raw_body() {
        let err = GeminiInferenceEngine::map_status(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Server error: Status 502 Bad Gateway: upstream down");
    }
}
