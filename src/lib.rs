//! Trailheads API.
//!
//! A read-only HTTP service that serves a fixed set of trailhead locations as
//! JSON:
//!
//! ```text
//! GET /            -> {"message": "Welcome to the trailheads API", "trailheads": "/trailheads"}
//! GET /trailheads  -> [{"ID": 1, "Name": "Baxter's Gulch", "Latitude": ..., "Longitude": ...}, ...]
//! ```
//!
//! Every response carries `Content-Type: application/json`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`trailhead`]: Trailhead record type and static table
//! - [`api`]: HTTP routes, handlers and middleware
//! - [`server`]: Socket binding and serving
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod trailhead;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
