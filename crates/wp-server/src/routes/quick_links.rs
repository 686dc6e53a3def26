use axum::Json;
use axum::extract::{Path, State};
use wp_core::responses::{AddQuickLinkRequest, SuccessResponse};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub async fn add_quick_link(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddQuickLinkRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .service
        .add_quick_link(&req.category, &req.name, &req.url)
        .await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.delete_quick_link_category(&category).await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn delete_link(
    State(state): State<AppState>,
    Path((category, index)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let index: usize = index
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid link index: {index}")))?;
    state.service.delete_quick_link(&category, index).await?;
    Ok(Json(SuccessResponse::OK))
}
