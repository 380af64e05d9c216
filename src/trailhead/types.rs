//! Trailhead record type.

use serde::Serialize;

/// A named trailhead with its coordinates in decimal degrees.
///
/// Serialized with capitalized keys (`ID`, `Name`, `Latitude`, `Longitude`),
/// which is the wire shape clients of `/trailheads` already consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trailhead {
    /// Trailhead identifier. Not unique.
    #[serde(rename = "ID")]
    pub id: i64,
    /// Display name.
    pub name: &'static str,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Trailhead {
    /// Create a trailhead record.
    pub const fn new(id: i64, name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
        }
    }
}
