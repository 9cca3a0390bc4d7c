//! Snapshot history with a movable current pointer.

use super::action::Placement;
use super::Board;
use serde::Serialize;

/// Every board reached so far, plus the index of the one on display.
///
/// Snapshot 0 is always the empty board and snapshot `i` is the board after
/// the `i`-th move. The snapshots and the pointer only change together:
/// [`Timeline::branch`] builds a whole new value that the owner swaps in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

impl Timeline {
    /// A timeline holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the snapshot on display.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of snapshots (moves recorded + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn latest(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Whether the pointer sits on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current == self.latest()
    }

    /// The snapshot on display.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// The move that produced snapshot `move_number`.
    ///
    /// `None` for the starting board, for indices past the end, and for
    /// snapshots that do not follow from their predecessor by one placement.
    pub fn placement(&self, move_number: usize) -> Option<Placement> {
        let before = self.snapshots.get(move_number.checked_sub(1)?)?;
        let after = self.snapshots.get(move_number)?;
        Placement::between(before, after)
    }

    /// Keeps snapshots up to and including the current one, appends `next`,
    /// and points at it.
    pub(crate) fn branch(&self, next: Board) -> Self {
        let mut snapshots = Vec::with_capacity(self.current + 2);
        snapshots.extend(&self.snapshots[..=self.current]);
        snapshots.push(next);
        Self {
            current: snapshots.len() - 1,
            snapshots,
        }
    }

    /// Moves the pointer. Callers check the bound.
    pub(crate) fn seek(&mut self, move_number: usize) {
        debug_assert!(move_number < self.snapshots.len());
        self.current = move_number;
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
