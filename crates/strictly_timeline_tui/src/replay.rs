//! Non-interactive replay: play a list of cells and print the result.

use std::io::{self, Write};
use strictly_timeline::{GameState, Position};
use tracing::{info, instrument};

/// Plays `cells` in order on a fresh game and writes the final state.
///
/// Cells that the game refuses (occupied, or played after a win) are
/// skipped just as they are in interactive play.
#[instrument(skip(out))]
pub fn run(cells: &[Position], ascending: bool, out: &mut impl Write) -> io::Result<GameState> {
    let mut game = GameState::with_order(ascending);
    for pos in cells {
        game.play_move_at(*pos);
    }
    info!(
        requested = cells.len(),
        played = game.current_move(),
        "Replay finished"
    );

    write_report(&game, out)?;
    Ok(game)
}

/// Writes the board, status and move list of `game`.
pub fn write_report(game: &GameState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", game.current_board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status())?;
    if let Some(win) = game.winner() {
        let [a, b, c] = win.indices();
        writeln!(out, "Winning line: {} {} {}", a, b, c)?;
    } else if game.is_draw() {
        writeln!(out, "Board full: draw")?;
    }

    writeln!(out)?;
    writeln!(out, "Moves:")?;
    for item in game.moves() {
        let move_number = item
            .action
            .map_or(game.current_move(), |action| action.move_number());
        let marker = if item.is_current() { '*' } else { ' ' };
        match game.placement(move_number) {
            Some(placement) => writeln!(out, "{} {} ({})", marker, item.label, placement)?,
            None => writeln!(out, "{} {}", marker, item.label)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(cells: &[usize], ascending: bool) -> (GameState, String) {
        let cells: Vec<Position> = cells
            .iter()
            .filter_map(|i| Position::from_index(*i))
            .collect();
        let mut out = Vec::new();
        let game = run(&cells, ascending, &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_replay_win() {
        let (game, out) = replay(&[0, 4, 1, 5, 2], true);

        assert_eq!(game.current_move(), 5);
        assert_eq!(
            out,
            "X|X|X\n-+-+-\n3|O|O\n-+-+-\n6|7|8\n\
             \n\
             Winner X\n\
             Winning line: 0 1 2\n\
             \n\
             Moves:\n\
             \x20 Go to game start\n\
             \x20 Go to move #1 (X -> Top-left)\n\
             \x20 Go to move #2 (O -> Center)\n\
             \x20 Go to move #3 (X -> Top-center)\n\
             \x20 Go to move #4 (O -> Middle-right)\n\
             * You are at move #5 (X -> Top-right)\n"
        );
    }

    #[test]
    fn test_replay_skips_rejected_cells() {
        let (game, out) = replay(&[4, 4, 0], false);

        assert_eq!(game.history().len(), 3);
        assert!(out.contains("Next player: X"));
        let moves: Vec<&str> = out
            .lines()
            .skip_while(|line| *line != "Moves:")
            .skip(1)
            .collect();
        assert_eq!(
            moves,
            [
                "* You are at move #2 (O -> Top-left)",
                "  Go to move #1 (X -> Center)",
                "  Go to game start",
            ]
        );
    }

    #[test]
    fn test_replay_draw() {
        let (_, out) = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], true);
        assert!(out.contains("Next player: O\nBoard full: draw\n"));
    }
}
