//! Well-known role names and the permissions each role is granted.
//!
//! Roles live in the identity provider; the API only ever sees the resulting
//! permission list. This table documents the expected setup and is used to
//! mint tokens in tests.

use crate::permissions::{
    CREATE_ACTOR, CREATE_MOVIE, DELETE_ACTOR, DELETE_MOVIE, READ_ACTORS, READ_MOVIES,
    UPDATE_ACTOR, UPDATE_MOVIE,
};

pub const ROLE_ASSISTANT: &str = "assistant";
pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_PRODUCER: &str = "producer";

const ASSISTANT_PERMISSIONS: &[&str] = &[READ_ACTORS, READ_MOVIES];

const DIRECTOR_PERMISSIONS: &[&str] = &[
    READ_ACTORS,
    READ_MOVIES,
    CREATE_ACTOR,
    DELETE_ACTOR,
    UPDATE_ACTOR,
    UPDATE_MOVIE,
];

const PRODUCER_PERMISSIONS: &[&str] = &[
    READ_ACTORS,
    READ_MOVIES,
    CREATE_ACTOR,
    DELETE_ACTOR,
    UPDATE_ACTOR,
    UPDATE_MOVIE,
    CREATE_MOVIE,
    DELETE_MOVIE,
];

/// Permissions granted to a role, or `None` for an unknown role name.
pub fn permissions_for_role(role: &str) -> Option<&'static [&'static str]> {
    match role {
        ROLE_ASSISTANT => Some(ASSISTANT_PERMISSIONS),
        ROLE_DIRECTOR => Some(DIRECTOR_PERMISSIONS),
        ROLE_PRODUCER => Some(PRODUCER_PERMISSIONS),
        _ => None,
    }
}
