//! Response status handling for PostgREST calls.

use serde::Deserialize;

use crate::error::SupabaseError;

/// PostgREST error body. Only `message` is surfaced.
#[derive(Deserialize)]
struct PostgrestError {
    message: String,
}

/// Pass successful responses through; turn anything else into
/// [`SupabaseError::Api`], preferring PostgREST's `message` over the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SupabaseError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<PostgrestError>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(SupabaseError::Api { status, message })
}
