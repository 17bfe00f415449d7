//! Domain error type shared across crates.

use crate::types::DbId;

/// Errors produced by domain logic, independent of any transport.
///
/// The API layer maps these onto HTTP statuses; the client surfaces them
/// directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
