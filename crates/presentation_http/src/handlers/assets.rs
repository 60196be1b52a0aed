//! Static assets served from memory

use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

use crate::views::{APP_CSS, APP_JS};

const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// Busy indicator script for the analyzer form
pub async fn app_js() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        APP_JS,
    )
}

/// Page stylesheet
pub async fn app_css() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, ASSET_CACHE_CONTROL),
        ],
        APP_CSS,
    )
}
