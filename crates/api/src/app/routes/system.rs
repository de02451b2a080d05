use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto, errors};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> Json<dto::MessageResponse> {
    Json(dto::MessageResponse {
        message: "Hello World",
    })
}

/// Status code declared explicitly rather than left to the default.
pub async fn status_code_example() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(dto::StatusResponse {
            response_status: "OK",
        }),
    )
}

pub async fn fallback() -> axum::response::Response {
    errors::not_found()
}
