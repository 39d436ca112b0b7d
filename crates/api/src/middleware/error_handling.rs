//! Maps domain errors onto HTTP status codes and JSON error bodies so the
//! whole API reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use studiobook_core::errors::StudioError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps [`StudioError`] and implements `IntoResponse`, so handlers can
/// return `Result<Json<T>, AppError>` and use `?` on anything convertible
/// into a `StudioError`.
#[derive(Debug)]
pub struct AppError(pub StudioError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            StudioError::Validation(_) => StatusCode::BAD_REQUEST,
            StudioError::NotFound(_) => StatusCode::NOT_FOUND,
            StudioError::Capacity(_) => StatusCode::CONFLICT,
            StudioError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StudioError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<StudioError> for AppError {
    fn from(err: StudioError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on store-level results inside handlers; persistence failures
/// surface as 500s.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(StudioError::Database(err))
    }
}
