//! Two-player N×N tic-tac-toe for the terminal.
//!
//! The library half of the crate holds the complete game engine - the
//! board model, winning-line generation, and the win/draw rules - plus
//! the console [`Session`] that drives a game over any `BufRead`/`Write`
//! pair. The binary is a thin wrapper that parses the CLI and runs a
//! session on stdin/stdout.
//!
//! # Example
//!
//! ```
//! use gridtac::{Dimension, Game, GameStatus, Move, Player};
//!
//! let mut game = Game::new(Dimension::new(3)?);
//! game.make_move(Move::new(Player::X, 4))?;
//! game.make_move(Move::new(Player::O, 0))?;
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod game;
mod session;

// Crate-level exports - game engine
pub use game::{
    Board, Dimension, DimensionError, Game, GameStatus, Move, MoveError, Player, Square, WinLine,
    check_winner, is_full, win_lines,
};

// Crate-level exports - console session
pub use session::Session;
