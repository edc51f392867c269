//! Permission strings granted by the identity provider.
//!
//! These must match the API permissions configured for the audience; each
//! route requires exactly one of them in the token's `permissions` claim.

pub const READ_ACTORS: &str = "read:actors";
pub const CREATE_ACTOR: &str = "create:actor";
pub const UPDATE_ACTOR: &str = "update:actor";
pub const DELETE_ACTOR: &str = "delete:actor";

pub const READ_MOVIES: &str = "read:movies";
pub const CREATE_MOVIE: &str = "create:movie";
pub const UPDATE_MOVIE: &str = "update:movie";
pub const DELETE_MOVIE: &str = "delete:movie";

/// Every permission the API knows about.
pub const ALL: [&str; 8] = [
    READ_ACTORS,
    CREATE_ACTOR,
    UPDATE_ACTOR,
    DELETE_ACTOR,
    READ_MOVIES,
    CREATE_MOVIE,
    UPDATE_MOVIE,
    DELETE_MOVIE,
];
