//! First-class move events for the engine.
//!
//! Moves are domain events, not side effects: they carry the acting
//! player and the target square, can be validated before application,
//! and serialize for replay.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a flat board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Flat index of the target square.
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the game state is untouched and the
/// same player may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a square on the board.
    #[display("Square {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let action = Move::new(Player::X, 4);
        assert_eq!(action.to_string(), "X -> 4");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(3).to_string(),
            "Square 3 is already occupied"
        );
        assert_eq!(
            MoveError::OutOfBounds(16).to_string(),
            "Square 16 is outside the board"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::O).to_string(),
            "It's not O's turn"
        );
    }
}
