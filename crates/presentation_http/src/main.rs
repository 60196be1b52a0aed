//! Deal Analyzer HTTP Server
//!
//! Main entry point for the web form.

use std::{sync::Arc, time::Duration};

use application::ports::{InferencePort, SessionStore};
use infrastructure::{
    AppConfig, DEFAULT_LOG_FILTER, GeminiInferenceAdapter, InMemorySessionStore, init_logging,
};
use presentation_http::{
    SecurityHeadersLayer, routes,
    shutdown::{serve_with_drain_deadline, shutdown_signal},
    spawn_session_cleanup_task,
    state::AppState,
};
use tokio::{net::TcpListener, sync::Notify};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the format can be chosen
    let config = AppConfig::load()?;

    init_logging(config.server.log_format, DEFAULT_LOG_FILTER)?;

    info!("Deal Analyzer v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!(error = %e, "Refusing to start with incomplete configuration");
        anyhow::bail!("{e}. Set it in config.toml or via DEAL_ANALYZER_* environment variables");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    // Initialize inference adapter
    let inference: Arc<dyn InferencePort> = Arc::new(
        GeminiInferenceAdapter::new(config.inference.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?,
    );

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let cleanup_handle = spawn_session_cleanup_task(
        Arc::clone(&sessions),
        Duration::from_secs(config.security.session_idle_timeout_secs),
        Duration::from_secs(config.security.session_cleanup_interval_secs.max(1)),
    );

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let body_limit = config.server.max_body_size_form_bytes;

    let state = AppState::new(config, inference, sessions)?;

    // Add middleware (order matters: last added = outermost)
    let app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(SecurityHeadersLayer::new())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = Arc::clone(&shutdown);
        async move { shutdown_signal(&shutdown).await }
    });

    serve_with_drain_deadline(server.into_future(), &shutdown, shutdown_timeout).await?;

    cleanup_handle.abort();
    info!("Server shutdown complete");

    Ok(())
}
