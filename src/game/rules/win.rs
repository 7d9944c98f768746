//! Win detection.

use crate::game::lines::WinLine;
use crate::game::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if a player owns a complete winning line.
///
/// Lines are evaluated in generation order and the scan stops at the
/// first fully-occupied line; within a line, the scan stops at the first
/// mismatching square. The result is order-independent because at most
/// one winner can exist when the check runs after every accepted move.
#[instrument(skip(board, lines))]
pub fn check_winner(board: &Board, lines: &[WinLine]) -> Option<Player> {
    lines.iter().find_map(|line| line_winner(board, line))
}

/// Returns the player covering every cell of a single line, if any.
fn line_winner(board: &Board, line: &WinLine) -> Option<Player> {
    let mut cells = line.cells().iter();
    let first = *cells.next()?;
    let player = match board.get(first) {
        Some(Square::Occupied(player)) => player,
        _ => return None,
    };
    for &index in cells {
        if board.get(index) != Some(Square::Occupied(player)) {
            return None;
        }
    }
    Some(player)
}
