//! Game state with time travel.
//!
//! [`GameState`] stores only the snapshot history, the current pointer and
//! the move-list order. Turn, winner and status are recomputed from the
//! displayed snapshot on every call.

use super::contracts::{Contract, PlayContract, assert_invariants};
use super::history::Timeline;
use super::move_list::{self, JumpTo, MoveListItem};
use super::rules::{self, WinningLine};
use super::{Board, Mark, Placement, Position};
use tracing::{debug, info, instrument};

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner {}", _0)]
    Winner(Mark),
    /// No winner yet; `_0` moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Tic-tac-toe game with full history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    timeline: Timeline,
    ascending: bool,
}

impl GameState {
    /// Creates a new game: empty board, X to move, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            ascending,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────

    /// Places the mark of the player to move at `cell_index` (0-8).
    ///
    /// Does nothing if the cell is occupied or the displayed board already
    /// has a winner. When playing from an earlier move, every snapshot after
    /// it is discarded before the new one is appended.
    ///
    /// # Panics
    ///
    /// Panics if `cell_index >= 9`.
    #[instrument(skip(self), fields(current_move = self.timeline.current()))]
    pub fn play_move(&mut self, cell_index: usize) {
        let Some(pos) = Position::from_index(cell_index) else {
            panic!("cell index {} out of range (expected 0-8)", cell_index);
        };
        self.play_move_at(pos);
    }

    /// Typed form of [`play_move`](Self::play_move).
    #[instrument(skip(self), fields(current_move = self.timeline.current()))]
    pub fn play_move_at(&mut self, pos: Position) {
        if let Err(rejection) = PlayContract::pre(&self.timeline, &pos) {
            debug!(%rejection, "Move ignored");
            return;
        }

        let mark = self.next_mark();
        let board = self.timeline.board().with_mark(pos, mark);
        let next = self.timeline.branch(board);

        #[cfg(debug_assertions)]
        if let Err(violations) = PlayContract::post(&self.timeline, &next) {
            panic!("play postcondition failed: {:?}", violations);
        }

        let discarded = self.timeline.latest() - self.timeline.current();
        if discarded > 0 {
            info!(discarded, "Branching history from an earlier move");
        }

        self.timeline = next;
        debug!(%mark, position = %pos, move_number = self.timeline.current(), "Move played");
    }

    /// Displays snapshot `move_number`. History is left intact.
    ///
    /// # Panics
    ///
    /// Panics if `move_number` is not a recorded snapshot.
    #[instrument(skip(self), fields(history_len = self.timeline.len()))]
    pub fn jump_to(&mut self, move_number: usize) {
        assert!(
            move_number < self.timeline.len(),
            "move number {} out of range (history has {} snapshots)",
            move_number,
            self.timeline.len()
        );
        self.timeline.seek(move_number);
        assert_invariants(&self.timeline);
        debug!("Jumped");
    }

    /// Runs the action attached to a move-list item.
    pub fn apply(&mut self, action: JumpTo) {
        self.jump_to(action.move_number());
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Move list order changed");
    }

    // ─────────────────────────────────────────────────────────
    //  Stored state
    // ─────────────────────────────────────────────────────────

    /// The snapshot history together with the current pointer.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// All snapshots, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        self.timeline.snapshots()
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.timeline.current()
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    // ─────────────────────────────────────────────────────────
    //  Derived state
    // ─────────────────────────────────────────────────────────

    /// The board on display.
    pub fn current_board(&self) -> &Board {
        self.timeline.board()
    }

    /// Whether X moves next on the displayed board.
    pub fn x_is_next(&self) -> bool {
        self.current_move().is_multiple_of(2)
    }

    /// Mark of the player to move on the displayed board.
    pub fn next_mark(&self) -> Mark {
        Mark::to_move_at(self.current_move())
    }

    /// Winning mark and line on the displayed board.
    pub fn winner(&self) -> Option<WinningLine> {
        rules::check_winner(self.current_board())
    }

    /// Whether the displayed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(win) => Status::Winner(win.mark),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Cells that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// The move that produced snapshot `move_number`.
    pub fn placement(&self, move_number: usize) -> Option<Placement> {
        self.timeline.placement(move_number)
    }

    /// Move list for this game in its current order.
    pub fn moves(&self) -> Vec<MoveListItem> {
        move_list::project(self.timeline.len(), self.current_move(), self.ascending)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
