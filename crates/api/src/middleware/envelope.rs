//! Uniform error bodies for responses produced outside the handlers.
//!
//! Extractor rejections (e.g. an oversized body), the request timeout and
//! method mismatches on routes without their own fallback answer with a
//! plain-text or empty body. [`json_error_envelope`] replaces such bodies
//! with the `{success: false, error, message}` envelope, keeping the status
//! and the remaining headers.

use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{error_response, message_for_status};

/// `axum::middleware::from_fn` middleware; see the module docs.
pub async fn json_error_envelope(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    tracing::debug!(status = status.as_u16(), "Wrapping bare error response");
    let (parts, _body) = response.into_parts();
    let mut wrapped = error_response(status, message_for_status(status));
    for (name, value) in &parts.headers {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            wrapped.headers_mut().append(name.clone(), value.clone());
        }
    }
    wrapped
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
