//! Draw detection.

use crate::game::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw; callers must run the win check
/// first, since a final move can both fill the board and win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::game::lines::win_lines;
    use crate::game::types::{Dimension, Player};

    fn dim(side: usize) -> Dimension {
        Dimension::new(side).expect("valid dimension")
    }

    fn is_draw(board: &Board) -> bool {
        let lines = win_lines(board.dimension());
        is_full(board) && check_winner(board, &lines).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(dim(3))));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(dim(3));
        board.place(4, Player::X).expect("empty square");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(dim(3));
        for index in 0..9 {
            board.place(index, Player::X).expect("empty square");
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no monochromatic line.
        let mut board = Board::new(dim(3));
        for index in [0, 2, 4, 5, 7] {
            board.place(index, Player::X).expect("empty square");
        }
        for index in [1, 3, 6, 8] {
            board.place(index, Player::O).expect("empty square");
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(dim(3));
        for index in [0, 1, 2] {
            board.place(index, Player::X).expect("empty square");
        }
        for index in [3, 4] {
            board.place(index, Player::O).expect("empty square");
        }
        assert!(!is_draw(&board));
    }
}
