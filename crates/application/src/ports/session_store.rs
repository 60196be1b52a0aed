//! Session storage port
//!
//! Holds the per-browser access state between requests.

use std::time::Duration;

use async_trait::async_trait;
use domain::{SessionContext, SessionId};

use crate::error::ApplicationError;

/// Port for session state storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a session, starting a fresh locked one when the ID is absent
    /// or unknown. The returned session has been touched.
    async fn load_or_create(
        &self,
        id: Option<SessionId>,
    ) -> Result<SessionContext, ApplicationError>;

    /// Insert or replace a session
    async fn save(&self, session: &SessionContext) -> Result<(), ApplicationError>;

    /// Move a session's state to a freshly issued ID and forget the old one.
    ///
    /// Returns the session under its new ID.
    async fn rotate(&self, session: &SessionContext) -> Result<SessionContext, ApplicationError>;

    /// Drop sessions idle for longer than `max_idle`, returning how many
    /// were removed
    async fn prune_idle(&self, max_idle: Duration) -> Result<usize, ApplicationError>;

    /// Number of live sessions
    async fn len(&self) -> usize;

    /// Whether no sessions are stored
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
