//! Request handlers.
//!
//! Each submodule provides the list, create, update and delete handlers for
//! one resource. Handlers delegate to the corresponding repository in
//! `agency_db` and map errors via [`AppError`].

pub mod actor;
pub mod movie;

use agency_core::error::CoreError;
use agency_core::payload::JsonObject;
use agency_core::types::DbId;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Numeric `{id}` path segment.
///
/// Only unsigned decimal ids match; anything else (`abc`, `-1`, `+5`) is
/// treated as an unknown route and answered with 404.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for EntityId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound)?;
        parse_entity_id(&raw)
            .map(EntityId)
            .ok_or(AppError::RouteNotFound)
    }
}

fn parse_entity_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Deserialize a checked JSON object into a typed DTO.
///
/// A value of the wrong type (e.g. `"age": "old"`) is unprocessable.
pub(crate) fn decode<T: DeserializeOwned>(body: JsonObject) -> Result<T, CoreError> {
    serde_json::from_value(serde_json::Value::Object(body))
        .map_err(|e| CoreError::Unprocessable(e.to_string()))
}
