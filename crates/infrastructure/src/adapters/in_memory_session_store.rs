//! In-memory session store adapter
//!
//! Sessions live only as long as the process. Each browser session is
//! independent; one unlocking never unlocks another.

use std::{collections::HashMap, sync::Arc, time::Duration};

use application::{error::ApplicationError, ports::SessionStore};
use async_trait::async_trait;
use chrono::Utc;
use domain::{SessionContext, SessionId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`SessionStore`]
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionContext>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load_or_create(
        &self,
        id: Option<SessionId>,
    ) -> Result<SessionContext, ApplicationError> {
        let mut sessions = self.sessions.write();

        if let Some(session) = id.and_then(|id| sessions.get_mut(&id)) {
            session.touch();
            return Ok(session.clone());
        }

        let session = SessionContext::new(SessionId::new());
        sessions.insert(session.id, session.clone());
        debug!(session = %session.id, "Started new session");
        Ok(session)
    }

    async fn save(&self, session: &SessionContext) -> Result<(), ApplicationError> {
        self.sessions.write().insert(session.id, session.clone());
        Ok(())
    }

    async fn rotate(&self, session: &SessionContext) -> Result<SessionContext, ApplicationError> {
        let mut rotated = session.clone();
        rotated.id = SessionId::new();
        rotated.touch();

        let mut sessions = self.sessions.write();
        sessions.remove(&session.id);
        sessions.insert(rotated.id, rotated.clone());
        debug!(old = %session.id, new = %rotated.id, "Rotated session ID");
        Ok(rotated)
    }

    async fn prune_idle(&self, max_idle: Duration) -> Result<usize, ApplicationError> {
        let max_idle = chrono::Duration::from_std(max_idle)
            .map_err(|e| ApplicationError::Internal(format!("Invalid idle timeout: {e}")))?;
        let cutoff = Utc::now() - max_idle;

        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen >= cutoff);
        Ok(before - sessions.len())
    }

    async fn len(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_id_starts_locked_session() {
        let store = InMemorySessionStore::new();
        let session = store.load_or_create(Some(SessionId::new())).await.unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn rotate_moves_state_to_new_id() {
        let store = InMemorySessionStore::new();
        let mut session = store.load_or_create(None).await.unwrap();
        session.mark_authenticated();

        let rotated = store.rotate(&session).await.unwrap();

        assert_ne!(rotated.id, session.id);
        assert!(rotated.is_authenticated());
        assert_eq!(store.len().await, 1);

        let old = store.load_or_create(Some(session.id)).await.unwrap();
        assert_ne!(old.id, session.id);
        assert!(!old.is_authenticated());

        let current = store.load_or_create(Some(rotated.id)).await.unwrap();
        assert!(current.is_authenticated());
    }

    #[tokio::test]
    async fn no_id_starts_new_session() {
        let store = InMemorySessionStore::new();
        let first = store.load_or_create(None).await.unwrap();
        let second = store.load_or_create(None).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn saved_session_is_returned() {
        let store = InMemorySessionStore::new();
        let mut session = store.load_or_create(None).await.unwrap();
        session.mark_authenticated();
        store.save(&session).await.unwrap();

        let loaded = store.load_or_create(Some(session.id)).await.unwrap();
        assert_eq!(loaded.id, session.id);
        assert!(loaded.is_authenticated());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = InMemorySessionStore::new();
        let mut unlocked = store.load_or_create(None).await.unwrap();
        let other = store.load_or_create(None).await.unwrap();
        unlocked.mark_authenticated();
        store.save(&unlocked).await.unwrap();

        let other = store.load_or_create(Some(other.id)).await.unwrap();
        assert!(!other.is_authenticated());
    }

    #[tokio::test]
    async fn prune_idle_drops_stale_sessions() {
        let store = InMemorySessionStore::new();
        let fresh = store.load_or_create(None).await.unwrap();
        let mut stale = store.load_or_create(None).await.unwrap();
        stale.last_seen = Utc::now() - chrono::Duration::hours(2);
        store.save(&stale).await.unwrap();

        let removed = store.prune_idle(Duration::from_secs(3600)).await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(store.len().await, 1);
        let kept = store.load_or_create(Some(fresh.id)).await.unwrap();
        assert_eq!(kept.id, fresh.id);
    }

    #[tokio::test]
    async fn pruned_session_comes_back_locked() {
        let store = InMemorySessionStore::new();
        let mut session = store.load_or_create(None).await.unwrap();
        session.mark_authenticated();
        session.last_seen = Utc::now() - chrono::Duration::hours(2);
        store.save(&session).await.unwrap();

        store.prune_idle(Duration::from_secs(60)).await.unwrap();
        let reloaded = store.load_or_create(Some(session.id)).await.unwrap();

        assert_ne!(reloaded.id, session.id);
        assert!(!reloaded.is_authenticated());
        assert!(!store.is_empty().await);
    }
}
