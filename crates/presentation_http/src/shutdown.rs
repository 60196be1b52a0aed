//! Graceful shutdown with a drain deadline

use std::{future::Future, time::Duration};

use tokio::sync::Notify;
use tracing::{error, info, warn};

/// Run the server until it finishes draining, or until `timeout` has passed
/// since `shutdown` was notified.
pub async fn serve_with_drain_deadline<F, E>(
    server: F,
    shutdown: &Notify,
    timeout: Duration,
) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
{
    let deadline = async {
        shutdown.notified().await;
        info!("Waiting up to {:?} for connections to close...", timeout);
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!(?timeout, "Connections still open after drain timeout, forcing shutdown");
            Ok(())
        }
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM), then notify `shutdown`
pub async fn shutdown_signal(shutdown: &Notify) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    shutdown.notify_one();
}
