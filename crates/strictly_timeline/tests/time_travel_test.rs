//! Tests for history, time travel and derived state.

use strictly_timeline::{Board, GameState, JumpTo, Mark, Position, Square};

fn played(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &cell in cells {
        game.play_move(cell);
    }
    game
}

fn cells(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|sq| match sq {
            Square::Empty => '_',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        })
        .collect()
}

#[test]
fn test_history_starts_with_empty_board() {
    let game = GameState::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0], Board::new());
}

#[test]
fn test_play_from_latest_appends_one_snapshot() {
    let mut game = GameState::new();
    for (i, cell) in [4, 0, 8, 2].into_iter().enumerate() {
        let old_len = game.history().len();
        assert_eq!(old_len, i + 1);

        game.play_move(cell);
        assert_eq!(game.history().len(), old_len + 1);
        assert_eq!(game.current_move(), old_len);
    }
}

#[test]
fn test_play_from_earlier_move_truncates() {
    let mut game = played(&[4, 0, 8, 2]);
    let old_history = game.history().to_vec();

    game.jump_to(2);
    game.play_move(6);

    assert_eq!(game.history().len(), 4);
    assert_eq!(&game.history()[..3], &old_history[..3]);
    assert_eq!(game.current_move(), 3);
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Mark::X)
    );
    // The discarded future is gone for good.
    assert!(!game.history().contains(&old_history[4]));
}

#[test]
fn test_jump_never_changes_history() {
    let mut game = played(&[4, 0, 8, 2, 6]);
    let history = game.history().to_vec();

    for move_number in [0, 3, 5, 1, 5] {
        game.jump_to(move_number);
        assert_eq!(game.current_move(), move_number);
        assert_eq!(game.history(), history.as_slice());
    }
}

#[test]
fn test_toggle_order_twice_is_identity() {
    let mut game = played(&[4, 0, 8]);
    game.jump_to(1);
    let before = game.moves();

    game.toggle_order();
    assert_ne!(game.moves(), before);
    assert!(!game.is_ascending());

    game.toggle_order();
    assert_eq!(game.moves(), before);
}

#[test]
fn test_toggle_order_leaves_game_untouched() {
    let mut game = played(&[4, 0]);
    let board = *game.current_board();

    game.toggle_order();
    assert_eq!(game.current_board(), &board);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
}

#[test]
fn test_occupied_cell_is_rejected() {
    let mut game = played(&[4]);
    let len = game.history().len();
    let current = game.current_move();

    game.play_move(4);

    assert_eq!(game.history().len(), len);
    assert_eq!(game.current_move(), current);
}

#[test]
fn test_move_after_win_is_rejected() {
    let mut game = played(&[0, 4, 1, 5, 2]);
    let history = game.history().to_vec();

    for cell in [3, 6, 7, 8] {
        game.play_move(cell);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_move(), 5);
    }
}

#[test]
fn test_top_row_win_scenario() {
    let game = played(&[0, 4, 1, 5, 2]);

    assert_eq!(cells(game.current_board()), "XXX_OO___");
    let win = game.winner().unwrap();
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.indices(), [0, 1, 2]);
    assert_eq!(game.status().to_string(), "Winner X");
}

#[test]
fn test_left_column_win_scenario() {
    let game = played(&[0, 1, 3, 4, 6]);

    assert_eq!(cells(game.current_board()), "XO_XO_X__");
    let win = game.winner().unwrap();
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.indices(), [0, 3, 6]);
}

#[test]
fn test_o_can_win() {
    let game = played(&[0, 2, 1, 4, 8, 6]);

    let win = game.winner().unwrap();
    assert_eq!(win.mark, Mark::O);
    assert_eq!(win.indices(), [2, 4, 6]);
    assert_eq!(game.status().to_string(), "Winner O");
}

#[test]
fn test_jump_to_start_after_five_moves() {
    let mut game = played(&[0, 4, 1, 5, 2]);
    game.jump_to(0);

    assert_eq!(game.current_board(), &Board::new());
    assert!(game.x_is_next());
    assert_eq!(game.status().to_string(), "Next player: X");
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_turn_follows_pointer_not_history_length() {
    let mut game = played(&[0, 4, 1, 5]);
    game.jump_to(1);
    assert!(!game.x_is_next());

    game.play_move(8);
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Mark::O)
    );
    assert!(game.x_is_next());
}

#[test]
fn test_move_list_drives_time_travel() {
    let mut game = played(&[4, 0, 8]);
    game.toggle_order();

    let items = game.moves();
    let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "You are at move #3",
            "Go to move #2",
            "Go to move #1",
            "Go to game start",
        ]
    );

    let action = items[2].action.unwrap();
    assert_eq!(action, JumpTo(1));
    game.apply(action);
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.moves()[2].label, "You are at move #1");
}

#[test]
#[should_panic(expected = "out of range")]
fn test_cell_index_out_of_range_panics() {
    let mut game = GameState::new();
    game.play_move(9);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_jump_past_end_panics() {
    let mut game = played(&[4]);
    game.jump_to(2);
}
