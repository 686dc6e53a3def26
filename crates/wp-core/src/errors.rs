//! Cross-cutting error types for Waypoint.
//!
//! Storage and transport errors (`StoreError`, `SupabaseError`) live in their
//! own crates and wrap `CoreError` where a domain rule was violated.

use thiserror::Error;

/// Errors raised by operations on the travel document.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A place was added to a city key that does not exist.
    #[error("City \"{0}\" not found")]
    UnknownCity(String),

    /// Two places share an id.
    #[error("Duplicate place id: {0}")]
    DuplicateId(String),

    /// Data failed validation (required fields, formats).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing place.
    #[must_use]
    pub fn place_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "Place".to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a missing quick-link category or link.
    #[must_use]
    pub fn quick_link_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Quick link".to_string(),
            id: id.into(),
        }
    }
}
