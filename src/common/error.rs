use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::common::response::ApiError;
use crate::infrastructure::tmdb::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request parameter.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn invalid(message: &str) -> Self {
        AppError::InvalidInput(message.to_string())
    }

    /// Input errors keep their message. Upstream failures are logged and
    /// replaced by `fallback` so callers never see upstream internals.
    pub fn into_api_error(self, fallback: &str) -> ApiError {
        match self {
            AppError::InvalidInput(message) => ApiError(message, StatusCode::BAD_REQUEST),
            AppError::Upstream(e) => {
                error!(error = %e, upstream_status = ?e.status_code(), "{}", fallback);
                ApiError(fallback.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
