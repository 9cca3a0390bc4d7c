//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn fill(moves: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in moves {
            board = board.with_mark(pos, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(&[(Position::Center, Mark::X)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = fill(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::X),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::O),
        ]);

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, Mark::X));

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
