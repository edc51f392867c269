//! Permission gate extractor.
//!
//! [`RequirePermission<P>`] verifies the request's bearer token and checks
//! that the permission named by the marker type `P` is granted. Put it first
//! in a handler's argument list so it runs before any other extractor reads
//! the path or body:
//!
//! ```ignore
//! async fn create(
//!     _: RequirePermission<CanCreateActor>,
//!     State(state): State<AppState>,
//!     body: Bytes,
//! ) -> AppResult<impl IntoResponse> { ... }
//! ```
//!
//! No claim data reaches the handler.

use std::marker::PhantomData;

use agency_core::error::CoreError;
use agency_core::permissions;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::{AuthError, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// A permission string known at compile time.
pub trait Permission: 'static {
    const NAME: &'static str;
}

macro_rules! permission_markers {
    ($($(#[$doc:meta])* $marker:ident => $name:path;)*) => {
        $(
            $(#[$doc])*
            pub struct $marker;

            impl Permission for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permission_markers! {
    /// `read:actors`
    CanReadActors => permissions::READ_ACTORS;
    /// `create:actor`
    CanCreateActor => permissions::CREATE_ACTOR;
    /// `update:actor`
    CanUpdateActor => permissions::UPDATE_ACTOR;
    /// `delete:actor`
    CanDeleteActor => permissions::DELETE_ACTOR;
    /// `read:movies`
    CanReadMovies => permissions::READ_MOVIES;
    /// `create:movie`
    CanCreateMovie => permissions::CREATE_MOVIE;
    /// `update:movie`
    CanUpdateMovie => permissions::UPDATE_MOVIE;
    /// `delete:movie`
    CanDeleteMovie => permissions::DELETE_MOVIE;
}

/// Check that `required` is among the token's granted permissions.
pub fn check_permission(required: &str, claims: &Claims) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsMissing)?;

    if !granted.iter().any(|p| p == required) {
        return Err(AuthError::PermissionDenied);
    }
    Ok(())
}

/// Rejects the request unless the bearer token grants permission `P`.
pub struct RequirePermission<P: Permission>(PhantomData<fn() -> P>);

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let outcome = match state.verifier.verify(parts.headers.get(AUTHORIZATION)).await {
            Ok(claims) => check_permission(P::NAME, &claims),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => Ok(RequirePermission(PhantomData)),
            Err(err) => Err(reject(err, P::NAME, state.config.auth.expose_errors)),
        }
    }
}

/// Turn a gate failure into the response error.
///
/// Unless `expose` is set, every failure is reported as a generic
/// authentication error. An unreachable key set is always reported as-is.
fn reject(err: AuthError, permission: &'static str, expose: bool) -> AppError {
    if let AuthError::KeySetUnavailable(detail) = &err {
        tracing::error!(permission, detail = %detail, "Signing keys unavailable");
        return AppError::Auth(err);
    }

    tracing::warn!(permission, code = err.code(), error = %err, "Request rejected by permission gate");
    if expose {
        AppError::Auth(err)
    } else {
        AppError::Core(CoreError::Unauthorized(err.to_string()))
    }
}
