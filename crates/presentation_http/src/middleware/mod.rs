//! HTTP middleware components

pub mod security_headers;

pub use security_headers::{CONTENT_SECURITY_POLICY, SecurityHeadersLayer};
