use axum::Json;
use axum::extract::{Path, State};
use wp_core::entities::Place;
use wp_core::responses::{AddPlaceRequest, PlaceCreatedResponse, SuccessResponse};
use wp_core::updates::PlaceUpdate;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub async fn add_place(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddPlaceRequest>,
) -> Result<Json<PlaceCreatedResponse>, ApiError> {
    let place = state.service.add_place(&req.city_key, req.place).await?;
    Ok(Json(PlaceCreatedResponse {
        success: true,
        place,
    }))
}

/// The place with `city` set to the key of the city holding it.
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    let (city, mut place) = state.service.get_place(&id).await?;
    place.city = Some(city);
    Ok(Json(place))
}

pub async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<PlaceUpdate>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.update_place(&id, update).await?;
    Ok(Json(SuccessResponse::OK))
}

pub async fn delete_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.delete_place(&id).await?;
    Ok(Json(SuccessResponse::OK))
}
