//! Row types and request DTOs.
//!
//! Update DTOs use `Option` fields; `None` leaves the stored column untouched.

pub mod actor;
pub mod movie;
