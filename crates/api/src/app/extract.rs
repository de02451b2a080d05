//! Extractors that turn framework rejections into [`ValidationError`]s.
//!
//! Parsing stays with axum and serde; these wrappers only decide how a
//! failure is reported (422 with per-field detail).

use axum::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use shaper_core::{BindResult, ValidationError, ValidationKind};

use crate::app::errors::ApiError;

/// A single path parameter bound from its raw segment.
pub trait PathParam: Sized {
    /// Parameter name as it appears in the route pattern.
    const NAME: &'static str;

    fn bind(raw: &str) -> BindResult<Self>;
}

/// Extracts and binds a [`PathParam`].
#[derive(Debug)]
pub struct Param<P>(pub P);

#[async_trait]
impl<S, P> FromRequestParts<S> for Param<P>
where
    S: Send + Sync,
    P: PathParam + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rej| ValidationError::path(P::NAME, rej.body_text(), ValidationKind::ValueError))?;

        Ok(Self(P::bind(&raw)?))
    }
}

/// JSON body extractor reporting failures as validation errors.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rej) => Err(json_rejection(&rej).into()),
        }
    }
}

/// Query string extractor reporting failures as validation errors.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rej) => Err(query_rejection(&rej).into()),
        }
    }
}

pub(crate) fn json_rejection(rej: &JsonRejection) -> ValidationError {
    let text = rej.body_text();
    match rej {
        JsonRejection::JsonDataError(_) => match missing_field(&text) {
            Some(field) => ValidationError::new(
                ["body", field],
                "Field required",
                ValidationKind::Missing,
            ),
            None => ValidationError::body(text, ValidationKind::JsonType),
        },
        JsonRejection::JsonSyntaxError(_) => ValidationError::body(text, ValidationKind::JsonInvalid),
        JsonRejection::MissingJsonContentType(_) => {
            ValidationError::body(text, ValidationKind::ContentType)
        }
        _ => ValidationError::body(text, ValidationKind::JsonInvalid),
    }
}

fn query_rejection(rej: &QueryRejection) -> ValidationError {
    let text = rej.body_text();
    match missing_field(&text) {
        Some(field) => ValidationError::query(field, "Field required", ValidationKind::Missing),
        None => ValidationError::new(["query"], text, ValidationKind::ValueError),
    }
}

/// Pull the field name out of serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.split("missing field `").nth(1)?;
    rest.split('`').next().filter(|f| !f.is_empty())
}
