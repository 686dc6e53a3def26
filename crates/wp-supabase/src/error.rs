//! Supabase error types.

use thiserror::Error;

/// Errors from talking to the Supabase REST API.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// URL or service-role key missing from configuration.
    #[error("Supabase is not configured (set SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY)")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// PostgREST returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// PostgREST `message` field, or the raw body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
