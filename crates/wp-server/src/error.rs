//! API error type and the JSON body extractor that reports through it.
//!
//! Every failure leaves the server as `{"error": "..."}` with a status code
//! chosen from the error kind. Storage failures are logged with their cause
//! and reported to the client with a generic message.

use axum::Json;
use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wp_auth::AuthError;
use wp_core::errors::CoreError;
use wp_core::responses::ErrorResponse;
use wp_store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Message is safe to show; the cause has already been logged.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::RngUnavailable(_)) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => core.into(),
            other => {
                tracing::error!(error = %other, "store operation failed");
                Self::Internal("Storage operation failed".to_string())
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            CoreError::UnknownCity(_) | CoreError::Validation(_) => Self::BadRequest(err.to_string()),
            CoreError::DuplicateId(_) => Self::Conflict(err.to_string()),
            CoreError::Other(e) => {
                tracing::error!(error = %e, "unexpected error");
                Self::Internal("Internal error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self, Self::Auth(_)) {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `Json` whose rejections are reported as [`ApiError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
