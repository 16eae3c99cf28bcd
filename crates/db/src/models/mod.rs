//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row and, where clients write to the table, a `Deserialize` DTO.

pub mod dashboard;
pub mod health_tracking;
pub mod profile;
pub mod question;
pub mod response;
pub mod treatment;

use mumentum_core::error::CoreError;

/// Report a row the domain layer cannot interpret.
pub(crate) fn corrupt_row(table: &str, err: impl std::fmt::Display) -> CoreError {
    CoreError::Infrastructure(format!("Corrupt row in {table}: {err}"))
}
