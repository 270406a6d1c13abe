//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An entity referenced by the caller does not exist.
    #[error("{entity} not found: {id}")]
    EntityNotFound {
        /// Human-readable entity kind, e.g. `"booking"`.
        entity: &'static str,
        /// The identifier that failed to resolve.
        id: Uuid,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
