//! Application state and key handling.
//!
//! The app owns a [`GameState`] and a little view state (cursor, focus,
//! list selection). Keys are translated into the game's three operations;
//! everything drawn is read back from the game afterwards.

use crate::input::{digit_cell, move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_timeline::{GameState, Position};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    MoveList,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(ascending: bool) -> Self {
        Self {
            game: GameState::with_order(ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Key reference for the help line.
    pub fn help(&self) -> &'static str {
        match self.focus {
            Focus::Board => "arrows move | enter/1-9 play | tab moves | o order | q quit",
            Focus::MoveList => "arrows select | enter jump | tab board | o order | q quit",
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
            KeyCode::Char('o') => {
                self.game.toggle_order();
                // Keep the same entry selected after the list flips.
                let last = self.list_len() - 1;
                self.selected = last - self.selected.min(last);
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::MoveList => self.handle_list_key(key),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.game.play_move_at(self.cursor),
            _ => {
                if let Some(pos) = digit_cell(key) {
                    self.cursor = pos;
                    self.game.play_move_at(pos);
                } else {
                    self.cursor = move_cursor(self.cursor, key);
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let moves = self.game.moves();
                if let Some(action) = moves.get(self.selected).and_then(|item| item.action) {
                    debug!(move_number = action.move_number(), "Jumping from list");
                    self.game.apply(action);
                }
            }
            _ => self.selected = move_selection(self.selected, self.list_len(), key),
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.current_row();
                Focus::MoveList
            }
            Focus::MoveList => Focus::Board,
        };
    }

    fn list_len(&self) -> usize {
        self.game.history().len()
    }

    fn current_row(&self) -> usize {
        if self.game.is_ascending() {
            self.game.current_move()
        } else {
            self.list_len() - 1 - self.game.current_move()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timeline::{Mark, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
    }

    /// Presses each character of `digits` as a key.
    fn type_digits(app: &mut App, digits: &str) {
        let keys: Vec<KeyCode> = digits.chars().map(KeyCode::Char).collect();
        press(app, &keys);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(
            app.game().current_board().get(Position::TopLeft),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_digits_play_directly() {
        let mut app = App::new(true);
        type_digits(&mut app, "151");

        // Third press hits an occupied cell and is ignored.
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = App::new(true);
        type_digits(&mut app, "159");

        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.focus(), Focus::MoveList);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_enter_on_current_entry_does_nothing() {
        let mut app = App::new(true);
        type_digits(&mut app, "5");
        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_toggle_order_keeps_selection_on_same_entry() {
        let mut app = App::new(true);
        type_digits(&mut app, "15");
        press(&mut app, &[KeyCode::Tab, KeyCode::Up]);
        let label = app.game().moves()[app.selected()].label.clone();

        press(&mut app, &[KeyCode::Char('o')]);
        assert!(!app.game().is_ascending());
        assert_eq!(app.game().moves()[app.selected()].label, label);
    }

    #[test]
    fn test_branching_from_the_past() {
        let mut app = App::new(false);
        type_digits(&mut app, "159");

        // Descending: row 0 is move #3, row 3 is the game start.
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.selected(), 0);
        press(&mut app, &[KeyCode::End, KeyCode::Enter, KeyCode::Tab]);
        type_digits(&mut app, "3");

        assert_eq!(app.game().history().len(), 2);
        assert_eq!(
            app.game().current_board().get(Position::TopRight),
            Square::Occupied(Mark::X)
        );
    }
}
