//! Core domain types for the N×N board.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player 1, marks `X`, moves first.
    X,
    /// Player 2, marks `O`.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 1-based ordinal used in console text ("Player 1", "Player 2").
    pub fn number(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Validated board side length.
///
/// Construction is fallible; every `Dimension` in circulation is inside
/// the supported range, so board and win-line sizing never re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension(usize);

/// Error returned for an unsupported board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DimensionError {
    /// Requested side length falls outside the supported range.
    #[display("Board size {} is out of range ({}-{})", _0, Dimension::MIN, Dimension::MAX)]
    OutOfRange(usize),
}

impl std::error::Error for DimensionError {}

impl Dimension {
    /// Smallest playable board.
    pub const MIN: usize = 3;
    /// Largest playable board.
    pub const MAX: usize = 10;

    /// Creates a validated dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::OutOfRange`] unless `side` is within
    /// [`Dimension::MIN`]..=[`Dimension::MAX`].
    #[instrument]
    pub fn new(side: usize) -> Result<Self, DimensionError> {
        if (Self::MIN..=Self::MAX).contains(&side) {
            Ok(Self(side))
        } else {
            Err(DimensionError::OutOfRange(side))
        }
    }

    /// Side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on the board (N²).
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Number of winning lines (2N + 2).
    pub fn line_count(self) -> usize {
        2 * self.0 + 2
    }
}

impl TryFrom<usize> for Dimension {
    type Error = DimensionError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// N×N board stored as N² squares in row-major order.
///
/// Index `i` maps to row `i / N`, column `i % N`. Squares change only
/// from empty to occupied; an occupied square is never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: Dimension,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            squares: vec![Square::Empty; dimension.cell_count()],
        }
    }

    /// Board dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Gets the square at the given flat index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the index addresses a square and that square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks whether a mark may legally be placed at the index.
    pub fn is_legal(&self, index: usize) -> bool {
        self.is_empty(index)
    }

    /// Places a player's mark at the index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if the index does not address a square,
    /// [`MoveError::SquareOccupied`] if the square is taken. The board is
    /// unchanged on error.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.squares.get(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => {
                self.squares[index] = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Count of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid: 3-character cells (` X `, ` O `, or spaces),
    /// `|` between columns, `---` segments joined by `+` between rows.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.dimension.get();
        for row in 0..n {
            for col in 0..n {
                let symbol = match self.squares[row * n + col] {
                    Square::Occupied(Player::X) => " X ",
                    Square::Occupied(Player::O) => " O ",
                    Square::Empty => "   ",
                };
                f.write_str(symbol)?;
                if col + 1 != n {
                    f.write_str("|")?;
                }
            }
            writeln!(f)?;
            if row + 1 != n {
                for col in 0..n {
                    f.write_str("---")?;
                    if col + 1 != n {
                        f.write_str("+")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}
