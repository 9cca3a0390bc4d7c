//! Strictly Timeline - tic-tac-toe with full move history and time travel.
//!
//! The game is an immutable-history state machine: every board ever reached
//! is kept as a snapshot, and a pointer selects the one on display. Jumping
//! moves the pointer; playing from an earlier snapshot discards the
//! snapshots after it and appends the new board.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a single [`Board`]
//! - **Timeline**: snapshots plus the current pointer, replaced as one value
//! - **GameState**: `play_move`, `jump_to` and `toggle_order`, with turn,
//!   winner and status derived on read
//! - **Move list**: renderer-agnostic projection of the history
//!
//! # Example
//!
//! ```
//! use strictly_timeline::GameState;
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.play_move(cell);
//! }
//! assert_eq!(game.status().to_string(), "Winner X");
//!
//! game.jump_to(0);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod types;

pub use action::{Placement, Rejection};
pub use game::{GameState, Status};
pub use history::Timeline;
pub use move_list::{JumpTo, MoveListItem, project};
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, Mark, Square};
