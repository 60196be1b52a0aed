//! Integration tests for the Gemini inference engine using WireMock
//!
//! These tests mock the Generative Language HTTP API to verify client
//! behavior without network access.

use ai_core::{
    GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        timeout_ms: Some(5000),
        ..InferenceConfig::default()
    }
    .with_api_key("test-api-key")
}

fn engine_for(server: &MockServer) -> GeminiInferenceEngine {
    GeminiInferenceEngine::new(config_for_mock(&server.uri())).expect("Failed to create engine")
}

/// Sample generateContent success response
fn success_response() -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": "**MAO:** $170,000\n\nVerdict: good deal."}]
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 80,
            "totalTokenCount": 200
        },
        "modelVersion": "gemini-pro"
    })
}

fn google_error(code: u16, message: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {"code": code, "message": message, "status": status}
    })
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test]
async fn generate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = engine_for(&mock_server);
    let response = engine
        .generate(InferenceRequest::simple("Analyze this wholesale deal"))
        .await
        .expect("generate should succeed");

    assert_eq!(response.content, "**MAO:** $170,000\n\nVerdict: good deal.");
    assert_eq!(response.model, "gemini-pro");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    let usage = response.usage.expect("usage should be present");
    assert_eq!(usage.prompt_tokens, 120);
    assert_eq!(usage.completion_tokens, 80);
    assert_eq!(usage.total_tokens, 200);
}

#[tokio::test]
async fn generate_sends_prompt_as_single_user_part() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "- ARV: $300000"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = engine_for(&mock_server);
    let response = engine.generate(InferenceRequest::simple("- ARV: $300000")).await;
    assert!(response.is_ok());
}

#[tokio::test]
async fn generate_uses_configured_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = InferenceConfig {
        default_model: "gemini-1.5-flash".to_string(),
        ..config_for_mock(&mock_server.uri())
    };
    let engine = GeminiInferenceEngine::new(config).expect("Failed to create engine");
    let response = engine.generate(InferenceRequest::simple("Hi")).await;
    assert!(response.is_ok());
}

// =============================================================================
// Failure paths
// =============================================================================

#[tokio::test]
async fn generate_invalid_key_is_authentication_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(google_error(
            400,
            "API key not valid. Please pass a valid API key.",
            "INVALID_ARGUMENT",
        )))
        .mount(&mock_server)
        .await;

    let err = engine_for(&mock_server)
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::AuthenticationFailed(_)));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn generate_quota_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(google_error(
            429,
            "Resource has been exhausted (e.g. check quota).",
            "RESOURCE_EXHAUSTED",
        )))
        .mount(&mock_server)
        .await;

    let err = engine_for(&mock_server)
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::RateLimited(_)));
    assert!(err.to_string().contains("Resource has been exhausted"));
}

#[tokio::test]
async fn generate_unknown_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(google_error(
            404,
            "models/gemini-pro is not found for API version v1beta",
            "NOT_FOUND",
        )))
        .mount(&mock_server)
        .await;

    let err = engine_for(&mock_server)
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::ModelNotAvailable(_)));
}

#[tokio::test]
async fn generate_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = engine_for(&mock_server)
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::ServerError(_)));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn generate_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = engine_for(&mock_server)
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::InvalidResponse(_)));
}

#[tokio::test]
async fn generate_blocked_prompt_reports_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&mock_server)
        .await;

    let err = engine_for(&mock_server)
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::InvalidResponse(_)));
    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn generate_connection_refused() {
    // Port 1 is reserved and nothing listens on it
    let engine =
        GeminiInferenceEngine::new(config_for_mock("http://127.0.0.1:1")).expect("engine");
    let err = engine
        .generate(InferenceRequest::simple("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InferenceError::ConnectionFailed(_) | InferenceError::RequestFailed(_)
    ));
}
