use agency_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::AuthError;
use crate::response::ErrorBody;

pub const MSG_AUTHENTICATION: &str = "Authentication error.";
pub const MSG_FORBIDDEN: &str = "Forbidden.";
pub const MSG_NOT_FOUND: &str = "Item not found.";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed.";
pub const MSG_UNPROCESSABLE: &str = "Request could not be processed.";
pub const MSG_INTERNAL: &str = "Internal server error.";
pub const MSG_TIMEOUT: &str = "Request timed out.";
pub const MSG_PAYLOAD_TOO_LARGE: &str = "Request entity too large.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for failures that
/// are reported with their own status and description, and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the uniform
/// `{success, error, message}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agency_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A verifier or permission-gate failure reported as-is.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::EmptyCollection(_) => {
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string())
                }
                CoreError::Unprocessable(detail) => {
                    tracing::debug!(detail = %detail, "Unprocessable request");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        MSG_UNPROCESSABLE.to_string(),
                    )
                }
                CoreError::Unauthorized(_) => {
                    (StatusCode::UNAUTHORIZED, MSG_AUTHENTICATION.to_string())
                }
            },

            // --- Auth errors keep their own status and description ---
            AppError::Auth(err) => (err.status(), err.to_string()),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                MSG_METHOD_NOT_ALLOWED.to_string(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        error_response(status, message)
    }
}

/// Build the `{success: false, error, message}` response for `status`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(status.as_u16(), message))).into_response()
}

/// Envelope message for a status produced outside the handlers, e.g. by a
/// middleware layer or an extractor rejection.
pub fn message_for_status(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNAUTHORIZED => MSG_AUTHENTICATION,
        StatusCode::FORBIDDEN => MSG_FORBIDDEN,
        StatusCode::NOT_FOUND => MSG_NOT_FOUND,
        StatusCode::METHOD_NOT_ALLOWED => MSG_METHOD_NOT_ALLOWED,
        StatusCode::REQUEST_TIMEOUT => MSG_TIMEOUT,
        StatusCode::PAYLOAD_TOO_LARGE => MSG_PAYLOAD_TOO_LARGE,
        StatusCode::UNPROCESSABLE_ENTITY => MSG_UNPROCESSABLE,
        s if s.is_server_error() => MSG_INTERNAL,
        s => s.canonical_reason().unwrap_or(MSG_UNPROCESSABLE),
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
    }
}
