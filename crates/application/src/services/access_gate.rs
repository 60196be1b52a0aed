//! Access gate - shared-password check guarding the analyzer
//!
//! One password for everyone. A session that has matched it once stays
//! unlocked; there is no lockout or attempt counting.

use domain::SessionContext;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;

/// Message shown when the submitted password does not match
pub const PASSWORD_INCORRECT: &str = "Password incorrect";

/// What the user did on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAttempt<'a> {
    /// Page viewed without pressing Login
    NotSubmitted,
    /// Login pressed with this candidate password
    Submitted(&'a str),
}

/// Result of running the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session was already unlocked; nothing was compared
    AlreadyAuthenticated,
    /// Password matched; session is now unlocked
    Granted,
    /// Password did not match
    Denied,
    /// No password submitted yet
    AwaitingSubmission,
}

impl AccessDecision {
    /// Whether the caller may continue to the analyzer
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::AlreadyAuthenticated | Self::Granted)
    }

    /// User-facing error for this decision, if any
    pub const fn error_message(self) -> Option<&'static str> {
        match self {
            Self::Denied => Some(PASSWORD_INCORRECT),
            _ => None,
        }
    }
}

/// Compares submitted passwords against the configured one
pub struct AccessGate {
    password: Option<SecretString>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AccessGate {
    /// Create a gate for the configured password.
    ///
    /// A blank password counts as not configured.
    pub fn new(password: Option<SecretString>) -> Self {
        let password = password.filter(|p| !p.expose_secret().is_empty());
        Self { password }
    }

    /// Whether a password is configured
    pub fn is_configured(&self) -> bool {
        self.password.is_some()
    }

    /// Run the gate for one interaction.
    ///
    /// An unlocked session short-circuits before anything else. Without a
    /// configured password every submission fails closed with a
    /// configuration error. On a match the session is unlocked in place.
    #[instrument(skip(self, attempt, session), fields(session = %session.id))]
    pub fn check_access(
        &self,
        attempt: LoginAttempt<'_>,
        session: &mut SessionContext,
    ) -> Result<AccessDecision, ApplicationError> {
        if session.is_authenticated() {
            return Ok(AccessDecision::AlreadyAuthenticated);
        }

        let LoginAttempt::Submitted(candidate) = attempt else {
            return Ok(AccessDecision::AwaitingSubmission);
        };

        let Some(password) = &self.password else {
            warn!("Login attempted but no access password is configured");
            return Err(ApplicationError::Configuration(
                "access password is not configured (security.app_password)".to_string(),
            ));
        };

        let matches: bool = candidate
            .as_bytes()
            .ct_eq(password.expose_secret().as_bytes())
            .into();

        if matches {
            session.mark_authenticated();
            info!("Session unlocked");
            Ok(AccessDecision::Granted)
        } else {
            debug!("Password mismatch");
            Ok(AccessDecision::Denied)
        }
    }
}
