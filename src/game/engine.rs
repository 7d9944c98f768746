//! The game engine: a finite state machine over board, turn, and status.

use super::action::{Move, MoveError};
use super::lines::{WinLine, win_lines};
use super::rules::{draw, win};
use super::types::{Board, Dimension, GameStatus, Player};
use tracing::{debug, instrument};

/// A game of N×N tic-tac-toe.
///
/// Owns the board, the winning lines generated once at construction, the
/// accepted-move history, and the [`GameStatus`] state machine. Moves are
/// fully validated before anything mutates, so a rejected move leaves the
/// game exactly as it was and the same player is still to move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    lines: Vec<WinLine>,
    to_move: Player,
    history: Vec<Move>,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with Player 1 (X) to move.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            board: Board::new(dimension),
            lines: win_lines(dimension),
            to_move: Player::X,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The generated winning lines.
    pub fn lines(&self) -> &[WinLine] {
        &self.lines
    }

    /// The player whose turn it is.
    ///
    /// Remains meaningful after the game ends: it is the player who made
    /// the final move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Accepted moves, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current status: in progress, won, or draw.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Makes a move.
    ///
    /// On success the mark is placed, the move recorded, and the status
    /// updated - win check first, then draw check. The turn passes to the
    /// opponent only when the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::WrongPlayer`] if `action.player` is not to move.
    /// - [`MoveError::OutOfBounds`] / [`MoveError::SquareOccupied`] from
    ///   board placement.
    #[instrument(skip(self), fields(position = action.position, player = %action.player))]
    pub fn make_move(&mut self, action: Move) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        self.board.place(action.position, action.player)?;
        self.history.push(action);

        if let Some(winner) = win::check_winner(&self.board, &self.lines) {
            debug!(winner = %winner, "game won");
            self.status = GameStatus::Won(winner);
        } else if draw::is_full(&self.board) {
            debug!("board full, game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(())
    }

    /// Replays recorded moves from the initial state.
    ///
    /// # Errors
    ///
    /// Any move the engine would have rejected live is rejected here too,
    /// including moves submitted after a terminal status.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(dimension: Dimension, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(dimension);
        for action in moves {
            game.make_move(*action)?;
        }
        Ok(game)
    }
}
