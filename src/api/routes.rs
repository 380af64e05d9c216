//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{root, trailheads, TRAILHEADS_PATH};
use super::middleware::{json_content_type, track_requests};

/// Create the API router.
///
/// Both routes are GET-only; other methods get axum's 405 and unknown paths
/// its default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route(TRAILHEADS_PATH, get(trailheads))
        .layer(middleware::from_fn(json_content_type))
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
}
