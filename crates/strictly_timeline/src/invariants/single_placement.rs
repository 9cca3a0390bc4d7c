//! Consecutive snapshots differ by exactly one new mark.

use super::Invariant;
use crate::Timeline;

/// Invariant: each snapshot after the first adds one mark to an empty cell
/// of its predecessor and changes nothing else.
pub struct SinglePlacementInvariant;

impl Invariant<Timeline> for SinglePlacementInvariant {
    fn holds(timeline: &Timeline) -> bool {
        (1..timeline.len()).all(|i| timeline.placement(i).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}
