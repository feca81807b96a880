//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! The storefront serves shoppers, so failures render branded pages rather
//! than bare status text: server-side failures get the error page, unknown
//! paths get the 404 page. The one exception is `ApiError::Unauthorized`,
//! which maps to a plain 401 so the login-redirect middleware can turn it
//! into a trip to `/login`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::ApiError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Admin API operation failed.
    #[error("Admin API error: {0}")]
    Api(#[from] ApiError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Page shown when a request fails server-side.
#[derive(Template, WebTemplate)]
#[template(path = "errors/server_error.html")]
struct ServerErrorTemplate;

/// Page shown for unknown paths and missing resources.
#[derive(Template, WebTemplate)]
#[template(path = "errors/not_found.html")]
struct NotFoundTemplate;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let is_server_error = match &self {
            Self::Api(ApiError::Unauthorized) | Self::NotFound(_) | Self::BadRequest(_) => false,
            Self::Api(_) => true,
        };

        // Capture server errors to Sentry
        if is_server_error {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        match &self {
            Self::Api(ApiError::Unauthorized) => StatusCode::UNAUTHORIZED.into_response(),
            Self::Api(_) => (StatusCode::BAD_GATEWAY, ServerErrorTemplate).into_response(),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, NotFoundTemplate).into_response(),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
