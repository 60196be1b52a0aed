//! HTTP error handling
//!
//! Errors that escape a handler are rendered as a small HTML page. Secrets
//! never appear in these messages.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::views::{PAGE_TITLE, ViewError};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The server is missing required configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The text-generation service failed
    #[error("{0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            },
            other => other.to_string(),
        };

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>{title}</title>\
             <link rel=\"stylesheet\" href=\"/assets/app.css\"></head>\n\
             <body><main><h1>{title}</h1><p class=\"error\" role=\"alert\">{message}</p></main></body>\n</html>\n",
            title = PAGE_TITLE,
            message = tera::escape_html(&message),
        );

        (status, Html(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Configuration(msg) => Self::Configuration(msg),
            ApplicationError::Dispatch(e) => Self::BadGateway(e.to_string()),
            ApplicationError::Inference(_)
            | ApplicationError::ExternalService(_)
            | ApplicationError::RateLimited(_) => {
                Self::BadGateway(application::DispatchError::from(err).to_string())
            },
            ApplicationError::NotAuthorized(msg) => Self::BadRequest(msg),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use application::DispatchError;

    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::BadRequest(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Configuration(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::BadGateway(String::new()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn dispatch_error_keeps_user_message() {
        let err = ApiError::from(ApplicationError::Dispatch(DispatchError::new("timeout")));
        assert_eq!(err.to_string(), "An error occurred: timeout");
    }

    #[test]
    fn external_service_error_becomes_dispatch_message() {
        let err = ApiError::from(ApplicationError::ExternalService("refused".to_string()));
        assert!(matches!(err, ApiError::BadGateway(_)));
        assert_eq!(err.to_string(), "An error occurred: refused");
    }

    #[test]
    fn configuration_error_maps() {
        let err = ApiError::from(ApplicationError::Configuration("missing".to_string()));
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn internal_error_response_hides_details() {
        let response = ApiError::Internal("template exploded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
