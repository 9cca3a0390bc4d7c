//! Marks alternate, starting with X.

use super::Invariant;
use crate::{Mark, Timeline};

/// Invariant: the move producing snapshot `i` placed X when `i - 1` is even
/// and O otherwise.
///
/// Snapshots whose placement cannot be recovered are left to
/// [`SinglePlacementInvariant`](super::SinglePlacementInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<Timeline> for AlternatingTurnInvariant {
    fn holds(timeline: &Timeline) -> bool {
        (1..timeline.len()).all(|i| {
            timeline
                .placement(i)
                .is_none_or(|placement| placement.mark == Mark::to_move_at(i - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
