use axum::{routing::get, Router};

pub mod filtering;
pub mod items;
pub mod system;
pub mod users;

/// Router for all demo endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/status_code_example/", get(system::status_code_example))
        .merge(items::router())
        .nest("/users", users::router())
        .nest("/filtering", filtering::router())
}
