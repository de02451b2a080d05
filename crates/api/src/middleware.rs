use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::context::RequestContext;

/// Header carrying the request id back to the caller.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a [`RequestContext`] to every request and log its outcome.
pub async fn request_context(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    req.extensions_mut().insert(ctx);

    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id(),
        %method,
        %path,
    );

    let mut res = next.run(req).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    span.in_scope(|| {
        let status = res.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms = ctx.elapsed_ms(), "request failed");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms = ctx.elapsed_ms(), "request completed");
        }
    });

    res
}
