//! Three ways of keeping the credential out of a user response.

use axum::{routing::get, Json, Router};

use shaper_core::shape::USER_EXCLUDE;
use shaper_core::{Extends, UserIn, UserIn2, UserOut};

use crate::app::dto::{Excluding, ResponseModel};
use crate::app::extract::ValidJson;

pub fn router() -> Router {
    Router::new()
        .route("/return_model", get(return_model).post(return_model))
        .route("/type_annotation", get(type_annotation).post(type_annotation))
        .route(
            "/explicit_exclusion",
            get(explicit_exclusion).post(explicit_exclusion),
        )
}

/// Returns the input untouched; the declared model decides the wire shape.
pub async fn return_model(ValidJson(user): ValidJson<UserIn>) -> ResponseModel<UserOut, UserIn> {
    ResponseModel::new(user)
}

/// Input extends the output shape; only the base view is returned.
pub async fn type_annotation(ValidJson(user): ValidJson<UserIn2>) -> Json<UserOut> {
    Json(user.into_base())
}

/// Full input shape with the credential excluded by name.
pub async fn explicit_exclusion(ValidJson(user): ValidJson<UserIn>) -> Excluding<UserIn> {
    Excluding::new(user, USER_EXCLUDE)
}
