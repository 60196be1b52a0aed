//! Logging initialization
//!
//! Console output only, as text or one JSON object per line.

mod logging;

pub use logging::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
