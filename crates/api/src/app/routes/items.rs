use axum::{routing::get, Json, Router};

use shaper_core::{bind_int, BindResult, BodyRecord, Source};

use crate::app::dto;
use crate::app::extract::{Param, PathParam, ValidJson};

/// Integer item identifier taken from the path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl PathParam for ItemId {
    const NAME: &'static str = "item_id";

    fn bind(raw: &str) -> BindResult<Self> {
        bind_int(Source::Path, Self::NAME, raw).map(Self)
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/items/", get(echo_body).post(echo_body))
        .route("/items/:item_id", get(read_item))
}

pub async fn read_item(Param(ItemId(item_id)): Param<ItemId>) -> Json<dto::ItemResponse> {
    Json(dto::ItemResponse { item_id })
}

/// Echo a validated body record back under `body`.
pub async fn echo_body(ValidJson(body): ValidJson<BodyRecord>) -> Json<dto::BodyEnvelope> {
    tracing::debug!(id = %body.id, "echoing body record");
    Json(dto::BodyEnvelope { body })
}
