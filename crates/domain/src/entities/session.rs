//! Per-browser session context holding the access gate state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::SessionId;

/// Whether a session has passed the access gate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    /// No correct password submitted yet
    #[default]
    Unauthenticated,
    /// Correct password submitted; stays this way for the session's lifetime
    Authenticated,
}

/// State of one browser session.
///
/// Only the access gate moves `access` forward; nothing moves it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Session identifier
    pub id: SessionId,
    /// Access gate state
    pub access: AccessState,
    /// Last time the session was used
    pub last_seen: DateTime<Utc>,
}

impl SessionContext {
    /// Start a fresh, locked session
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            access: AccessState::Unauthenticated,
            last_seen: Utc::now(),
        }
    }

    /// Whether the access gate has been passed
    pub fn is_authenticated(&self) -> bool {
        self.access == AccessState::Authenticated
    }

    /// Unlock the session
    pub fn mark_authenticated(&mut self) {
        self.access = AccessState::Authenticated;
    }

    /// Record activity
    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}
