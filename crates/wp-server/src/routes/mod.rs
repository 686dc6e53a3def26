//! `/api` routes.

mod data;
mod places;
mod quick_links;
mod session;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};

use crate::auth::require_auth;
use crate::error::ApiError;
use crate::state::AppState;

/// Everything under `/api`. Only `POST /login` is reachable without a token.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/logout", post(session::logout))
        .route("/data", get(data::get_data).post(data::replace_data))
        .route("/places", post(places::add_place))
        .route(
            "/places/{id}",
            get(places::get_place)
                .put(places::update_place)
                .delete(places::delete_place),
        )
        .route("/quick-links", post(quick_links::add_quick_link))
        .route(
            "/quick-links/{category}",
            delete(quick_links::delete_category),
        )
        .route(
            "/quick-links/{category}/{index}",
            delete(quick_links::delete_link),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .route("/login", post(session::login))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such API route".to_string())
}
