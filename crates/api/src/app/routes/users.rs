use axum::{routing::get, Json, Router};

use shaper_core::{
    bind_bounded_str, bind_transport, classify, BindResult, Source, TransportKind, USER_ID_MAX_LEN,
};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::extract::{Param, PathParam, ValidQuery};

/// User identifier of at most [`USER_ID_MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl PathParam for UserId {
    const NAME: &'static str = "user_id";

    fn bind(raw: &str) -> BindResult<Self> {
        bind_bounded_str(Source::Path, Self::NAME, raw, USER_ID_MAX_LEN).map(Self)
    }
}

/// Transport selector given by ordinal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TransportParam(pub TransportKind);

impl PathParam for TransportParam {
    const NAME: &'static str = "transport_type";

    fn bind(raw: &str) -> BindResult<Self> {
        bind_transport(Source::Path, Self::NAME, raw).map(Self)
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/me", get(read_user_me))
        .route("/:user_id", get(read_user))
        .route("/transport/:transport_type", get(get_transport))
}

pub async fn read_user_me() -> Json<dto::UserIdResponse> {
    Json(dto::UserIdResponse {
        user_id: "the current user".to_string(),
        q: None,
    })
}

pub async fn read_user(
    Param(UserId(user_id)): Param<UserId>,
    ValidQuery(query): ValidQuery<dto::UserQuery>,
) -> Result<Json<dto::UserIdResponse>, ApiError> {
    let q = query
        .q
        .map(|raw| bind_bounded_str(Source::Query, "q", &raw, USER_ID_MAX_LEN))
        .transpose()?;

    Ok(Json(dto::UserIdResponse { user_id, q }))
}

pub async fn get_transport(
    Param(TransportParam(kind)): Param<TransportParam>,
) -> Json<dto::TransportResponse> {
    Json(dto::TransportResponse {
        transport: classify(kind),
    })
}
