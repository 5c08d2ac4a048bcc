//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No entity of the given kind has the requested id.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The entity kind, e.g. `"ticket"`.
        entity: &'static str,
        /// The requested identifier.
        id: i64,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Shorthand for a `NotFound` error on entity type `T`.
    #[must_use]
    pub fn not_found<T: crate::entity::Entity>(id: i64) -> Self {
        Self::NotFound {
            entity: T::KIND,
            id,
        }
    }
}
