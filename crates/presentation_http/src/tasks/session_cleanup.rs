//! Idle session cleanup task
//!
//! Periodically drops sessions that have been idle longer than the configured
//! timeout. A dropped session comes back locked on its next request.

use std::{sync::Arc, time::Duration};

use application::ports::SessionStore;
use tracing::{debug, error, info};

/// Spawn a background task that periodically prunes idle sessions.
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting down.
///
/// # Example
///
/// ```ignore
/// let cleanup_handle = spawn_session_cleanup_task(
///     sessions,
///     Duration::from_secs(3600), // drop after an idle hour
///     Duration::from_secs(300),  // check every five minutes
/// );
///
/// // On shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_session_cleanup_task(
    sessions: Arc<dyn SessionStore>,
    max_idle: Duration,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        max_idle_secs = max_idle.as_secs(),
        interval_secs = interval.as_secs(),
        "Starting session cleanup task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Don't run immediately on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match sessions.prune_idle(max_idle).await {
                Ok(0) => debug!("No idle sessions to clean up"),
                Ok(removed) => {
                    let remaining = sessions.len().await;
                    info!(
                        removed_count = removed,
                        remaining = remaining,
                        "Dropped idle sessions"
                    );
                },
                Err(e) => error!(error = %e, "Failed to clean up idle sessions"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use infrastructure::InMemorySessionStore;

    use super::*;

    #[tokio::test]
    async fn cleanup_task_drops_idle_sessions() {
        let store = Arc::new(InMemorySessionStore::new());
        let fresh = store.load_or_create(None).await.unwrap();
        let mut stale = store.load_or_create(None).await.unwrap();
        stale.last_seen = Utc::now() - chrono::Duration::hours(2);
        store.save(&stale).await.unwrap();

        let handle = spawn_session_cleanup_task(
            store.clone(),
            Duration::from_secs(3600),
            Duration::from_millis(50),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.abort();

        assert_eq!(store.len().await, 1);
        let kept = store.load_or_create(Some(fresh.id)).await.unwrap();
        assert_eq!(kept.id, fresh.id);
    }

    #[tokio::test]
    async fn cleanup_task_can_be_aborted() {
        let store = Arc::new(InMemorySessionStore::new());

        let handle =
            spawn_session_cleanup_task(store, Duration::from_secs(60), Duration::from_secs(3600));

        handle.abort();

        let result = handle.await;
        assert!(result.is_err());
    }
}
