//! Storage error types for wp-store.

use thiserror::Error;
use wp_core::errors::CoreError;

/// Errors from loading, saving, or mutating the travel document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Local file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for `TravelData`.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document does not exist and creating it was not allowed.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// HTTP transport error talking to a remote store.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Remote content could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A blocking task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(String),

    /// The OS random source failed while generating an id.
    #[error("Random source unavailable: {0}")]
    Rng(String),

    /// A document rule was violated (unknown city, missing place, ...).
    #[error(transparent)]
    Core(#[from] CoreError),
}
