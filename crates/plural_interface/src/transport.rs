//! The transport seam.

use crate::ApiRequest;
use async_trait::async_trait;
use plural_error::PluralResult;

/// A pluggable request executor.
///
/// This is the only boundary where the client touches the network. The
/// reqwest-backed implementation lives in `plural_http`; tests substitute
/// recording fakes to observe exactly what would have been sent.
///
/// Implementations are expected to:
/// - attach authentication and encode the request faithfully,
/// - map non-success statuses to `HttpError` kinds,
/// - return `Value::Null` for empty (204) responses,
/// - never retry; staging above this seam relies on one call meaning one
///   request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the parsed response body.
    async fn execute(&self, request: ApiRequest) -> PluralResult<serde_json::Value>;
}
