//! Middleware applied to every API route.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::{header::CONTENT_TYPE, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::metrics;

/// Content type attached to every response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Set `Content-Type: application/json` on the response.
///
/// Replaces whatever the inner handler set, so the header appears once.
pub async fn json_content_type(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    response
}

/// Record request count and latency under the matched route path.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = request.method().clone();

    let response = next.run(request).await;
    let status = response.status().as_u16();

    debug!(%method, %endpoint, status, "request completed");
    metrics::record_http_request(start, &endpoint, status);

    response
}
