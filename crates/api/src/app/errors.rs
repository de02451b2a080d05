use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use shaper_core::{ShapeError, ValidationError};

/// Error returned by handlers and extractors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input failed binding or shape validation.
    #[error("request validation failed")]
    Validation(Vec<ValidationError>),

    /// A response could not be serialized at the boundary.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(vec![err])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => validation_error(errors),
            ApiError::Shape(e) => {
                tracing::error!("response shaping failed: {e}");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "serialization_error", e.to_string())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 422 with one detail entry per offending field.
pub fn validation_error(errors: Vec<ValidationError>) -> Response {
    let first = errors.first();
    let message = first
        .map(|e| e.msg.clone())
        .unwrap_or_else(|| "invalid request".to_string());

    tracing::debug!(
        count = errors.len(),
        kind = first.map(|e| e.kind.as_str()),
        "rejecting request: {message}"
    );

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": message,
            "detail": errors,
        })),
    )
        .into_response()
}

pub fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "Not Found")
}
