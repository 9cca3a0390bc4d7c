//! Contract-based validation for placing a mark.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use super::action::Rejection;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::rules::check_winner;
use super::{Position, Timeline};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target cell on the displayed board is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a placement onto an occupied cell.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), Rejection> {
        if timeline.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(pos))
        }
    }
}

/// Precondition: the displayed board has no winner yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects any placement once a line is complete.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), Rejection> {
        match check_winner(timeline.board()) {
            Some(win) => Err(Rejection::GameDecided(win.mark)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: the cell is empty and the game is undecided.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), Rejection> {
        CellIsEmpty::check(pos, timeline)?;
        GameUndecided::check(timeline)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark on the displayed board.
///
/// Preconditions:
/// - Cell must be empty
/// - Board must have no winner
///
/// Postconditions:
/// - Snapshots up to the old pointer are kept verbatim
/// - Exactly one snapshot follows them and the pointer sits on it
/// - All [`TimelineInvariants`] hold
pub struct PlayContract;

impl Contract<Timeline, Position> for PlayContract {
    fn pre(timeline: &Timeline, pos: &Position) -> Result<(), Rejection> {
        LegalPlacement::check(*pos, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = TimelineInvariants::check_all(after)
            .err()
            .unwrap_or_default();

        let kept = before.current() + 1;
        if after.len() != kept + 1 || after.snapshots()[..kept] != before.snapshots()[..kept] {
            violations.push(InvariantViolation::new(
                "Play keeps history up to the current move and appends one snapshot",
            ));
        }
        if !after.is_at_latest() {
            violations.push(InvariantViolation::new(
                "Play moves the pointer to the new snapshot",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Play postcondition failed");
            Err(violations)
        }
    }
}

/// Asserts that all timeline invariants hold (panics on violation in debug builds).
#[instrument(skip(timeline))]
pub fn assert_invariants(timeline: &Timeline) {
    debug_assert!(
        TimelineInvariants::check_all(timeline).is_ok(),
        "Timeline invariants violated: {:?}",
        TimelineInvariants::check_all(timeline)
    );
}
