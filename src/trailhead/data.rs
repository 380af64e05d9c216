//! Static trailhead table.
//!
//! Entries 2-4 share ID 2. The values are kept exactly as published.

use super::types::Trailhead;

/// Every trailhead served by the API, in response order.
pub static TRAILHEADS: [Trailhead; 4] = [
    Trailhead::new(1, "Baxter's Gulch", 38.86027669451596, -106.9727601880234),
    Trailhead::new(2, "Journey's End", 38.86619254425446, -106.99025183412073),
    Trailhead::new(2, "Upended", 37.7654537389772, -105.9273626660029),
    Trailhead::new(2, "Kebler Pass Trailhead", 38.86762614165766, -107.02326178550722),
];

/// All trailheads as a slice.
pub fn all() -> &'static [Trailhead] {
    &TRAILHEADS
}
