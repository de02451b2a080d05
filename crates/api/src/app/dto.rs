use std::marker::PhantomData;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use shaper_core::{BodyRecord, render_as, serialize_excluding};

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub q: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item_id: i64,
}

#[derive(Debug, Serialize)]
pub struct UserIdResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransportResponse {
    pub transport: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub response_status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BodyEnvelope {
    pub body: BodyRecord,
}

// -------------------------
// Response shaping
// -------------------------

/// Response whose wire shape is the declared model `M`, whatever `T` is.
///
/// `T` is re-read through `M` when the response is produced, so fields `M`
/// does not declare never reach the client.
pub struct ResponseModel<M, T> {
    value: T,
    _model: PhantomData<fn() -> M>,
}

impl<M, T> ResponseModel<M, T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            _model: PhantomData,
        }
    }
}

impl<M, T> IntoResponse for ResponseModel<M, T>
where
    M: Serialize + DeserializeOwned,
    T: Serialize,
{
    fn into_response(self) -> Response {
        match render_as::<M>(&self.value) {
            Ok(model) => Json(model).into_response(),
            Err(e) => ApiError::from(e).into_response(),
        }
    }
}

/// Response serializing the full `T` minus a named set of fields.
pub struct Excluding<T> {
    value: T,
    exclude: &'static [&'static str],
}

impl<T> Excluding<T> {
    pub fn new(value: T, exclude: &'static [&'static str]) -> Self {
        Self { value, exclude }
    }
}

impl<T: Serialize> IntoResponse for Excluding<T> {
    fn into_response(self) -> Response {
        match serialize_excluding(&self.value, self.exclude) {
            Ok(map) => Json(map).into_response(),
            Err(e) => ApiError::from(e).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use shaper_core::{UserIn, UserOut};

    async fn body_json(res: Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn alice() -> UserIn {
        UserIn {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            age: 30,
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn response_model_drops_undeclared_fields() {
        let res = ResponseModel::<UserOut, _>::new(alice()).into_response();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({"id": "u1", "name": "Alice", "age": 30}));
    }

    #[tokio::test]
    async fn response_model_on_incompatible_value_is_500() {
        let res = ResponseModel::<UserOut, _>::new(json!({"name": "no id"})).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn excluding_removes_named_fields() {
        let res = Excluding::new(alice(), &["password", "age"]).into_response();
        assert_eq!(body_json(res).await, json!({"id": "u1", "name": "Alice"}));
    }

    #[test]
    fn user_id_response_omits_absent_query() {
        let v = serde_json::to_value(UserIdResponse { user_id: "a".into(), q: None }).unwrap();
        assert_eq!(v, json!({"user_id": "a"}));
    }
}
