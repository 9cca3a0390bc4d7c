//! The history always begins with the empty board.

use super::Invariant;
use crate::{Board, Timeline};

/// Invariant: snapshot 0 exists and is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<Timeline> for StartsEmptyInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
