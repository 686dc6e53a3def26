use axum::extract::State;
use axum::{Extension, Json};
use wp_core::responses::{LoginRequest, LoginResponse, SuccessResponse};

use crate::auth::BearerToken;
use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.gate.login(&req.password)?;
    tracing::info!(active = state.gate.tokens().len(), "login");
    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> Json<SuccessResponse> {
    state.gate.logout(&token);
    Json(SuccessResponse::OK)
}
