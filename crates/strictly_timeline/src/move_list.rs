//! Move list projection.
//!
//! Turns the shape of a history into renderer-agnostic list items. Nothing
//! here knows how the list is drawn; a front end maps each item's
//! [`JumpTo`] action onto whatever control it uses.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request to display the snapshot with the wrapped index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpTo(pub usize);

impl JumpTo {
    /// Snapshot index to jump to.
    pub fn move_number(self) -> usize {
        self.0
    }
}

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// Text shown for the entry.
    pub label: String,
    /// What selecting the entry does; `None` for the current move.
    pub action: Option<JumpTo>,
}

impl MoveListItem {
    /// Whether this entry describes the snapshot on display.
    pub fn is_current(&self) -> bool {
        self.action.is_none()
    }
}

/// Builds the move list for a history of `history_len` snapshots.
///
/// Items are produced in snapshot order, then the whole list is reversed
/// when `ascending` is false.
#[instrument]
pub fn project(history_len: usize, current_move: usize, ascending: bool) -> Vec<MoveListItem> {
    debug_assert!(current_move < history_len);

    let mut items: Vec<MoveListItem> = (0..history_len)
        .map(|i| {
            if i == current_move {
                MoveListItem {
                    label: format!("You are at move #{}", i),
                    action: None,
                }
            } else if i == 0 {
                MoveListItem {
                    label: "Go to game start".to_string(),
                    action: Some(JumpTo(0)),
                }
            } else {
                MoveListItem {
                    label: format!("Go to move #{}", i),
                    action: Some(JumpTo(i)),
                }
            }
        })
        .collect();

    if !ascending {
        items.reverse();
    }

    items
}
