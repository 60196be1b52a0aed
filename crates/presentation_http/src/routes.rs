//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::pages::index))
        .route("/login", post(handlers::pages::login))
        .route("/analyze", post(handlers::pages::analyze))
        // Static assets
        .route("/assets/app.js", get(handlers::assets::app_js))
        .route("/assets/app.css", get(handlers::assets::app_css))
        // Health
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
