//! Security configuration: access password and session lifetime.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Shared access password for the analyzer
    ///
    /// Set via `DEAL_ANALYZER_SECURITY__APP_PASSWORD` rather than a file
    /// checked into version control.
    #[serde(default, skip_serializing)]
    pub app_password: Option<SecretString>,

    /// Mark the session cookie `Secure` (enable behind HTTPS)
    #[serde(default)]
    pub session_cookie_secure: bool,

    /// Sessions idle longer than this are dropped (default: 3600 = 1 hour)
    #[serde(default = "default_session_idle_timeout")]
    pub session_idle_timeout_secs: u64,

    /// How often idle sessions are swept (default: 300 = 5 minutes)
    #[serde(default = "default_session_cleanup_interval")]
    pub session_cleanup_interval_secs: u64,
}

const fn default_session_idle_timeout() -> u64 {
    3600
}

const fn default_session_cleanup_interval() -> u64 {
    300
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            app_password: None,
            session_cookie_secure: false,
            session_idle_timeout_secs: default_session_idle_timeout(),
            session_cleanup_interval_secs: default_session_cleanup_interval(),
        }
    }
}
