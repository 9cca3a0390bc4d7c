//! First-class move records and rejection reasons.

use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// A single move: a mark placed at a position.
///
/// Placements are not stored; they are recovered from two consecutive
/// snapshots with [`Placement::between`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Recovers the placement that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one cell differs and that cell went
    /// from empty to occupied.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::ALL
            .into_iter()
            .filter(|pos| before.get(*pos) != after.get(*pos));

        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (before.get(position), after.get(position)) {
            (Square::Empty, Square::Occupied(mark)) => Some(Self { mark, position }),
            _ => None,
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was turned down.
///
/// Rejections are ordinary user input, not faults: the game state simply
/// stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameDecided(Mark),
}

impl std::error::Error for Rejection {}
