//! Configuration for the inference client

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the generative language client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Model identifier used for every request
    #[serde(default = "default_model")]
    pub default_model: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds; `None` leaves it to the transport
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_version() -> String {
    "v1beta".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            default_model: default_model(),
            api_key: None,
            timeout_ms: None,
        }
    }
}

impl InferenceConfig {
    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }
}
