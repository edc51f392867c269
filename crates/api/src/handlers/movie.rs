//! Handlers for the `/movies` resource.

use agency_core::error::CoreError;
use agency_core::payload;
use agency_core::types::DbId;
use agency_db::models::movie::{
    CreateMovie, Movie, UpdateMovie, MUTABLE_FIELDS, REQUIRED_FIELDS,
};
use agency_db::repositories::MovieRepo;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use super::{decode, EntityId};
use crate::error::{AppError, AppResult};
use crate::middleware::permission::{
    CanCreateMovie, CanDeleteMovie, CanReadMovies, CanUpdateMovie, RequirePermission,
};
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MovieList {
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct MovieBody {
    pub movie: Movie,
}

#[derive(Debug, Serialize)]
pub struct DeletedMovie {
    pub movie_id: DbId,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /movies
///
/// List all movies; 404 when there are none.
pub async fn list(
    _: RequirePermission<CanReadMovies>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool).await?;
    if movies.is_empty() {
        return Err(CoreError::EmptyCollection("movies").into());
    }
    Ok(Json(Envelope::ok(MovieList { movies })))
}

/// POST /movies
///
/// Create a movie. `title` and `release` (`YYYY-MM-DD`) must both be present.
pub async fn create(
    _: RequirePermission<CanCreateMovie>,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let body = payload::parse_object(&body)?;
    payload::require_fields(&body, REQUIRED_FIELDS)?;
    let input: CreateMovie = decode(body)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, "Movie created");
    Ok(Json(Envelope::ok(MovieBody { movie })))
}

/// PATCH /movies/{id}
///
/// Same partial-update rules as actors.
pub async fn update(
    _: RequirePermission<CanUpdateMovie>,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let changes = payload::truthy_fields(payload::parse_patch(&body)?, MUTABLE_FIELDS);
    let input: UpdateMovie = decode(changes)?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(Envelope::ok(MovieBody { movie })))
}

/// DELETE /movies/{id}
pub async fn delete(
    _: RequirePermission<CanDeleteMovie>,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(Json(Envelope::ok(DeletedMovie { movie_id: id })))
}
