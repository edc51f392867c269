//! Request guards and response shaping around the handlers.
//!
//! - [`permission::RequirePermission`] -- Verifies the bearer token and
//!   requires one named permission.
//! - [`envelope::json_error_envelope`] -- Gives bare error responses the
//!   JSON error envelope.

pub mod envelope;
pub mod permission;
