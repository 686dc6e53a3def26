//! Router assembly: API, static client, and the cross-cutting layers.

use std::path::Path;

use axum::Router;
use axum::http::Method;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::routes::api_router;
use crate::state::AppState;

/// The full application.
///
/// When `client_dist` is a directory its files are served at `/`, and any
/// path that is neither an API route nor a file gets `index.html` so the
/// client can route it.
pub fn router(state: AppState, client_dist: Option<&Path>) -> Router {
    let mut app = Router::new().nest("/api", api_router(state));

    if let Some(dist) = client_dist.filter(|d| d.is_dir()) {
        tracing::info!(dir = %dist.display(), "serving web client");
        let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));
        app = app.fallback_service(spa);
    }

    app.layer(cors()).layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
