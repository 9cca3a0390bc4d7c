//! The current pointer names an existing snapshot.

use super::Invariant;
use crate::Timeline;

/// Invariant: `current < len`.
pub struct PointerInBoundsInvariant;

impl Invariant<Timeline> for PointerInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current() < timeline.len()
    }

    fn description() -> &'static str {
        "Current move points at a recorded snapshot"
    }
}
