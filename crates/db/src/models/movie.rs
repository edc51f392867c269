use agency_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Keys that must be present in a create body.
pub const REQUIRED_FIELDS: &[&str] = &["title", "release"];

/// Keys a PATCH body may change.
pub const MUTABLE_FIELDS: &[&str] = &["title", "release"];

/// A row from the `movies` table. `release` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release: NaiveDate,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release: NaiveDate,
}

/// DTO for updating a movie. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release: Option<NaiveDate>,
}
