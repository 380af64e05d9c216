//! Trailhead module.
//!
//! This module handles:
//! - The trailhead record type
//! - The static trailhead table served by the API

pub mod data;
pub mod types;

pub use data::{all, TRAILHEADS};
pub use types::Trailhead;
