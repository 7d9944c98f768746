//! Scripted end-to-end console games over in-memory I/O.

use gridtac::{Dimension, GameStatus, Player, Session};
use std::io::Cursor;

/// Runs a session against scripted stdin lines and captures the
/// transcript. Screen clearing is off so the transcript stays plain.
fn run_script(lines: &str, preset: Option<usize>) -> (GameStatus, String) {
    let input = Cursor::new(lines.to_string());
    let mut output = Vec::new();
    let preset = preset.map(|side| Dimension::new(side).expect("valid dimension"));
    let mut session = Session::new(input, &mut output, false);
    let status = session.run(preset).expect("session should complete");
    (status, String::from_utf8(output).expect("utf8 transcript"))
}

#[test]
fn test_full_game_with_dimension_prompt() {
    // 3x3; X takes squares 1, 2, 3 (row 0), O takes 4 and 5.
    let (status, transcript) = run_script("3\n1\n4\n2\n5\n3\n", None);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(transcript.contains("Enter board size (3-10): "));
    assert!(transcript.contains("\tTic Tac Toe"));
    assert!(transcript.contains("Player 1 (X) - Player 2 (O)"));
    assert!(transcript.contains("Player 1, enter your choice (1-9): "));
    assert!(transcript.contains("Player 1 won!"));
}

#[test]
fn test_winning_board_is_shown_with_the_result() {
    let (_, transcript) = run_script("3\n1\n4\n2\n5\n3\n", None);
    let final_grid = concat!(
        " X | X | X \n",
        "---+---+---\n",
        " O | O |   \n",
        "---+---+---\n",
        "   |   |   \n",
        "\nPlayer 1 won!\n",
    );
    assert!(transcript.ends_with(final_grid));
}

#[test]
fn test_draw_game() {
    // Final board: X O X / O X X / O X O.
    let (status, transcript) = run_script("1\n2\n3\n4\n5\n7\n6\n9\n8\n", Some(3));
    assert_eq!(status, GameStatus::Draw);
    assert!(transcript.contains("It's a draw!"));
}

#[test]
fn test_preset_dimension_skips_prompt() {
    // 4x4; X claims column 0 (squares 1, 5, 9, 13).
    let (status, transcript) = run_script("1\n2\n5\n3\n9\n4\n13\n", Some(4));
    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(!transcript.contains("Enter board size"));
    assert!(transcript.contains("Player 1, enter your choice (1-16): "));
}

#[test]
fn test_non_numeric_input_reprompts() {
    let (status, transcript) = run_script("x\nthree\n3\n1\n4\n2\n5\n3\n", None);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(
        transcript
            .matches("Invalid input, please enter a number: ")
            .count(),
        2
    );
}

#[test]
fn test_out_of_range_dimension_reprompts() {
    let (status, transcript) = run_script("2\n11\n3\n1\n4\n2\n5\n3\n", None);
    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(
        transcript
            .matches("Invalid size. Please enter a number between 3 and 10.")
            .count(),
        2
    );
    assert_eq!(transcript.matches("Enter board size (3-10): ").count(), 3);
}

#[test]
fn test_out_of_range_move_keeps_the_same_player() {
    // Square 10 does not exist on a 3x3 board; neither do 0 and -2.
    let (status, transcript) = run_script("10\n0\n-2\n1\n4\n2\n5\n3\n", Some(3));
    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(transcript.contains("Square 10 is outside the board."));
    assert!(transcript.contains("Square 0 is outside the board."));
    assert!(transcript.contains("Square -2 is outside the board."));
    // Player 1 was re-prompted for each rejection plus three real moves.
    assert_eq!(
        transcript
            .matches("Player 1, enter your choice (1-9): ")
            .count(),
        6
    );
    assert_eq!(
        transcript
            .matches("Player 2, enter your choice (1-9): ")
            .count(),
        2
    );
}

#[test]
fn test_occupied_square_keeps_the_same_player() {
    // O tries X's square 1 before settling on 4.
    let (status, transcript) = run_script("1\n1\n4\n2\n5\n3\n", Some(3));
    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(transcript.contains("Square 1 is already occupied."));
    assert_eq!(
        transcript
            .matches("Player 2, enter your choice (1-9): ")
            .count(),
        3
    );
    assert_eq!(
        transcript
            .matches("Player 1, enter your choice (1-9): ")
            .count(),
        3
    );
}
