//! `Authorization: Bearer <token>` parsing.

use axum::http::HeaderValue;

use super::AuthError;

/// Return the token part of a bearer `Authorization` header.
///
/// The scheme is matched case-insensitively and the header must contain
/// exactly two whitespace-separated parts.
pub fn bearer_token(header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingHeader)?;
    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Authorization header is not valid text."))?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(AuthError::MissingHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidHeader(
            "Authorization header must start with \"Bearer\".",
        ));
    }

    let token = parts
        .next()
        .ok_or(AuthError::InvalidHeader("Token not found."))?;

    if parts.next().is_some() {
        return Err(AuthError::InvalidHeader(
            "Authorization header must be bearer token.",
        ));
    }

    Ok(token)
}
