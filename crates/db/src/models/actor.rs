//! Actor entity model and DTOs.

use agency_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Keys that must be present in a create body.
pub const REQUIRED_FIELDS: &[&str] = &["name", "age", "gender"];

/// Keys a PATCH body may change.
pub const MUTABLE_FIELDS: &[&str] = &["name", "age", "gender"];

/// A row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// DTO for updating an actor. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
