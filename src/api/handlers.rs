//! HTTP API handlers.

use axum::Json;
use serde::Serialize;

use crate::trailhead::{self, Trailhead};

/// Welcome message returned at `/`.
pub const WELCOME_MESSAGE: &str = "Welcome to the trailheads API";

/// Path of the trailheads collection.
pub const TRAILHEADS_PATH: &str = "/trailheads";

/// Root response pointing at the trailheads collection.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Greeting.
    pub message: &'static str,
    /// Path of the trailheads resource.
    pub trailheads: &'static str,
}

/// Root handler.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE,
        trailheads: TRAILHEADS_PATH,
    })
}

/// Trailheads handler - returns every trailhead in table order.
pub async fn trailheads() -> Json<&'static [Trailhead]> {
    Json(trailhead::all())
}
