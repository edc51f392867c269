//! Bearer-token authentication against an external identity provider.
//!
//! - [`header`] -- Extracts the raw token from the `Authorization` header.
//! - [`jwks`] -- Sources of the issuer's published signing keys.
//! - [`verifier`] -- Signature, audience, issuer and expiry checks.

pub mod header;
pub mod jwks;
pub mod verifier;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use verifier::{AuthConfig, TokenVerifier};

/// Decoded claim set of a verified access token.
///
/// Only `permissions` is interpreted; every other claim is kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Authentication and authorization failures raised before a handler runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    MissingHeader,

    #[error("{0}")]
    InvalidHeader(&'static str),

    #[error("Token expired.")]
    TokenExpired,

    /// Audience or issuer mismatch, or a registered claim is missing.
    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    /// The verified token carries no `permissions` claim at all.
    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    PermissionDenied,

    /// The issuer's key set could not be fetched or parsed.
    #[error("Unable to fetch signing keys.")]
    KeySetUnavailable(String),
}

impl AuthError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::InvalidHeader(_) => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
            AuthError::KeySetUnavailable(_) => "jwks_unavailable",
        }
    }

    /// HTTP status the failure maps to when it is reported as-is.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingHeader
            | AuthError::InvalidHeader(_)
            | AuthError::TokenExpired
            | AuthError::InvalidClaims => StatusCode::UNAUTHORIZED,
            AuthError::PermissionsMissing => StatusCode::BAD_REQUEST,
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
            AuthError::KeySetUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
