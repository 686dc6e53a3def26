//! # wp-server
//!
//! HTTP API for the Waypoint travel planner, built on axum.
//!
//! All routes live under `/api`. `POST /api/login` trades the shared
//! password for a bearer token; every other route requires
//! `Authorization: Bearer <token>`. Data operations go through a
//! [`wp_store::TravelService`], so concurrent writes are serialized.
//!
//! The built web client, when present, is served from `/` with an
//! `index.html` fallback.

pub mod app;
pub mod auth;
pub mod error;
pub mod routes;
pub mod serve;
pub mod state;

pub use app::router;
pub use error::ApiError;
pub use serve::{serve, serve_on};
pub use state::AppState;
