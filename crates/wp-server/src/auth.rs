//! Bearer-token middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use wp_auth::{AuthError, bearer_token};

use crate::error::ApiError;
use crate::state::AppState;

/// The verified token of the current request, for handlers that need it.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Reject requests without a live token from the token set.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or(AuthError::MissingToken)?
        .to_string();
    state.gate.tokens().verify(&token)?;

    req.extensions_mut().insert(BearerToken(token));
    Ok(next.run(req).await)
}
