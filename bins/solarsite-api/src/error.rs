//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::types::ErrorBody;

/// Errors surfaced by the `/solar` handler.
///
/// `Validation` maps to 400 and is only produced by the missing-parameter
/// check; everything else, including numeric parse failures, is a
/// `Computation` error and maps to 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Computation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Computation(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(status = %status, error = %message, "request failed");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
