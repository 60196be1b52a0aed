//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `security`: Access password and session lifetime
//!
//! Inference settings come from [`ai_core::InferenceConfig`].

mod security;
mod server;

use std::path::Path;

use ai_core::InferenceConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use security::SecurityConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix for environment overrides, e.g. `DEAL_ANALYZER_SERVER__PORT`
pub const ENV_PREFIX: &str = "DEAL_ANALYZER";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A required secret is absent or empty
    #[error("Missing required secret `{0}`")]
    MissingSecret(&'static str),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from the given file stem and environment.
    ///
    /// The file is optional; its format is picked from the extension.
    /// Environment variables override file values.
    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        let builder = ::config::Config::builder()
            .add_source(::config::File::from(file).required(false))
            // Override with environment variables (e.g., DEAL_ANALYZER_INFERENCE__API_KEY)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            host = %config.server.host,
            port = config.server.port,
            model = %config.inference.default_model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check that every required secret is present.
    ///
    /// Empty strings count as missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_blank(self.security.app_password.as_ref()) {
            return Err(ConfigError::MissingSecret("security.app_password"));
        }
        if is_blank(self.inference.api_key.as_ref()) {
            return Err(ConfigError::MissingSecret("inference.api_key"));
        }
        Ok(())
    }
}

fn is_blank(secret: Option<&SecretString>) -> bool {
    secret.is_none_or(|s| s.expose_secret().trim().is_empty())
}
