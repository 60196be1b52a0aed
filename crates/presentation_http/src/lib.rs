//! Deal analyzer HTTP presentation layer
//!
//! Serves the password page, the deal form and the rendered analysis.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod shutdown;
pub mod state;
pub mod tasks;
pub mod views;

pub use error::ApiError;
pub use middleware::SecurityHeadersLayer;
pub use routes::create_router;
pub use state::AppState;
pub use tasks::spawn_session_cleanup_task;
