//! Shared response envelope types for API handlers.
//!
//! Every response body carries a top-level `success` flag. Successful
//! responses flatten a resource-specific payload next to it, e.g.
//! `{ "success": true, "actors": [...] }`; failures use [`ErrorBody`].

use serde::Serialize;

/// `{ "success": true, ...body }` response envelope.
///
/// `T` must serialize as a map (a struct with named fields).
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(ActorBody { actor })))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// `{ "success": false, "error": <status>, "message": <text> }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status,
            message: message.into(),
        }
    }
}
