pub mod actor;
pub mod health;
pub mod movie;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy (relative to the configured base path):
///
/// ```text
/// /actors           GET list, POST create
/// /actors/{id}      PATCH update, DELETE delete
/// /movies           GET list, POST create
/// /movies/{id}      PATCH update, DELETE delete
/// ```
///
/// Every route is guarded by its own permission; see
/// [`crate::middleware::permission`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/actors",
            actor::router().method_not_allowed_fallback(method_not_allowed),
        )
        .nest(
            "/movies",
            movie::router().method_not_allowed_fallback(method_not_allowed),
        )
}

/// Fallback for paths that match no route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
