//! Route definitions for movies.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /       -> list     (read:movies)
/// POST   /       -> create   (create:movie)
/// PATCH  /{id}   -> update   (update:movie)
/// DELETE /{id}   -> delete   (delete:movie)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/{id}", patch(movie::update).delete(movie::delete))
}
