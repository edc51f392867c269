//! Handlers for the `/actors` resource.

use agency_core::error::CoreError;
use agency_core::payload;
use agency_core::types::DbId;
use agency_db::models::actor::{
    Actor, CreateActor, UpdateActor, MUTABLE_FIELDS, REQUIRED_FIELDS,
};
use agency_db::repositories::ActorRepo;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use super::{decode, EntityId};
use crate::error::{AppError, AppResult};
use crate::middleware::permission::{
    CanCreateActor, CanDeleteActor, CanReadActors, CanUpdateActor, RequirePermission,
};
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActorList {
    pub actors: Vec<Actor>,
}

#[derive(Debug, Serialize)]
pub struct ActorBody {
    pub actor: Actor,
}

#[derive(Debug, Serialize)]
pub struct DeletedActor {
    pub actor_id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Actor", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /actors
///
/// List all actors. An empty table is reported as 404, not as `[]`.
pub async fn list(
    _: RequirePermission<CanReadActors>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list(&state.pool).await?;
    if actors.is_empty() {
        return Err(CoreError::EmptyCollection("actors").into());
    }
    Ok(Json(Envelope::ok(ActorList { actors })))
}

/// POST /actors
///
/// Create an actor. `name`, `age` and `gender` must all be present.
pub async fn create(
    _: RequirePermission<CanCreateActor>,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let body = payload::parse_object(&body)?;
    payload::require_fields(&body, REQUIRED_FIELDS)?;
    let input: CreateActor = decode(body)?;

    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = actor.id, "Actor created");
    Ok(Json(Envelope::ok(ActorBody { actor })))
}

/// PATCH /actors/{id}
///
/// Apply the truthy fields of the body; falsy or absent fields keep their
/// stored value.
pub async fn update(
    _: RequirePermission<CanUpdateActor>,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let changes = payload::truthy_fields(payload::parse_patch(&body)?, MUTABLE_FIELDS);
    let input: UpdateActor = decode(changes)?;

    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(actor_id = id, "Actor updated");
    Ok(Json(Envelope::ok(ActorBody { actor })))
}

/// DELETE /actors/{id}
pub async fn delete(
    _: RequirePermission<CanDeleteActor>,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(actor_id = id, "Actor deleted");
    Ok(Json(Envelope::ok(DeletedActor { actor_id: id })))
}
