use axum::Json;
use axum::extract::State;
use wp_core::entities::TravelData;
use wp_core::responses::SuccessResponse;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub async fn get_data(State(state): State<AppState>) -> Result<Json<TravelData>, ApiError> {
    Ok(Json(state.service.data().await?))
}

pub async fn replace_data(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<TravelData>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.replace(data).await?;
    Ok(Json(SuccessResponse::OK))
}
