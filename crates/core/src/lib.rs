//! Domain building blocks shared by the database and API crates.

pub mod error;
pub mod payload;
pub mod permissions;
pub mod roles;
pub mod types;
