//! Route definitions for actors.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /       -> list     (read:actors)
/// POST   /       -> create   (create:actor)
/// PATCH  /{id}   -> update   (update:actor)
/// DELETE /{id}   -> delete   (delete:actor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list).post(actor::create))
        .route("/{id}", patch(actor::update).delete(actor::delete))
}
