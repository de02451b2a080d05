//! HTTP API application wiring (Axum router + middleware).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `extract.rs`: extractors mapping rejections to validation errors
//! - `dto.rs`: request/response DTOs and response shaping wrappers
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::fallback)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_context)))
}
