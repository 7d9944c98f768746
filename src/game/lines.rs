//! Winning-line generation.
//!
//! Every way to win on an N×N board: N rows, N columns, and the two
//! diagonals, 2N + 2 lines in total. The set is generated once per game
//! from the dimension and immutable afterwards.

use super::types::Dimension;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One full-length sequence of board indices that wins the game if
/// uniformly occupied by a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine(Vec<usize>);

impl WinLine {
    /// The cell indices covered by this line, in board order.
    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    /// Number of cells in the line (always N).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the line is empty (never, for generated lines).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Generates all winning lines for the given dimension.
///
/// Order: rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal.
#[instrument]
pub fn win_lines(dimension: Dimension) -> Vec<WinLine> {
    let n = dimension.get();
    let mut lines = Vec::with_capacity(dimension.line_count());

    for row in 0..n {
        lines.push(WinLine((0..n).map(|col| row * n + col).collect()));
    }
    for col in 0..n {
        lines.push(WinLine((0..n).map(|row| row * n + col).collect()));
    }
    lines.push(WinLine((0..n).map(|i| i * n + i).collect()));
    lines.push(WinLine((0..n).map(|i| i * n + (n - 1 - i)).collect()));

    lines
}
