//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Gemini inference adapter, session storage, configuration
//! loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, LogFormat, SecurityConfig, ServerConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
