use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Per-request context, inserted into request extensions by the middleware.
///
/// Immutable once created; handlers may read it via `Extension<RequestContext>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    received_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::now_v7(),
            received_at: Utc::now(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Milliseconds elapsed since the request was received.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.received_at).num_milliseconds()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
