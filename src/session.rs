//! Interactive console session: one complete game, from the dimension
//! prompt to the terminal message.

use crate::console;
use crate::game::{Dimension, Game, GameStatus, Move, MoveError};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Banner printed above the grid on every redraw.
const BANNER: &str = "\n\tTic Tac Toe\n\nPlayer 1 (X) - Player 2 (O)\n";

/// A synchronous two-player session over arbitrary I/O streams.
///
/// Generic over the streams so scripted games can run against in-memory
/// buffers in tests; the binary hands it stdin and stdout.
pub struct Session<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session. With `clear_screen` set, the terminal is wiped
    /// before every redraw.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Runs one game to completion and returns the final status.
    ///
    /// `preset` skips the interactive dimension prompt.
    ///
    /// # Errors
    ///
    /// Only I/O failures (including EOF on input) end the session early;
    /// malformed and illegal input is re-prompted.
    #[instrument(skip(self))]
    pub fn run(&mut self, preset: Option<Dimension>) -> Result<GameStatus> {
        let dimension = match preset {
            Some(dimension) => dimension,
            None => self.prompt_dimension()?,
        };
        info!(side = dimension.get(), "starting game");

        let mut game = Game::new(dimension);
        let cells = dimension.cell_count();
        let mut notice: Option<String> = None;

        loop {
            self.draw(&game, notice.take())?;

            let player = game.to_move();
            write!(
                self.output,
                "\nPlayer {}, enter your choice (1-{}): ",
                player.number(),
                cells
            )?;
            self.output.flush()?;
            let choice = console::read_integer(&mut self.input, &mut self.output)?;

            // 1-based on the console, 0-based on the board.
            let Some(position) = choice
                .checked_sub(1)
                .and_then(|index| usize::try_from(index).ok())
            else {
                warn!(choice, "choice out of range");
                notice = Some(format!("Square {} is outside the board.", choice));
                continue;
            };

            if let Err(rejection) = game.make_move(Move::new(player, position)) {
                warn!(rejection = %rejection, choice, "move rejected");
                notice = Some(rejection_notice(rejection, choice));
                continue;
            }

            match game.status() {
                GameStatus::InProgress => {}
                GameStatus::Won(winner) => {
                    self.draw(&game, None)?;
                    writeln!(self.output, "\nPlayer {} won!", winner.number())?;
                    info!(winner = %winner, moves = game.history().len(), "game over");
                    return Ok(game.status());
                }
                GameStatus::Draw => {
                    self.draw(&game, None)?;
                    writeln!(self.output, "\nIt's a draw!")?;
                    info!(moves = game.history().len(), "game over");
                    return Ok(game.status());
                }
            }
        }
    }

    /// Prompts until a board size in the valid range is supplied.
    fn prompt_dimension(&mut self) -> Result<Dimension> {
        loop {
            write!(
                self.output,
                "Enter board size ({}-{}): ",
                Dimension::MIN,
                Dimension::MAX
            )?;
            self.output.flush()?;
            let value = console::read_integer(&mut self.input, &mut self.output)?;

            let dimension = usize::try_from(value)
                .ok()
                .and_then(|side| Dimension::new(side).ok());
            match dimension {
                Some(dimension) => return Ok(dimension),
                None => {
                    warn!(value, "board size rejected");
                    writeln!(
                        self.output,
                        "Invalid size. Please enter a number between {} and {}.",
                        Dimension::MIN,
                        Dimension::MAX
                    )?;
                }
            }
        }
    }

    /// Clears the screen (when enabled), then prints the banner, the
    /// grid, and any pending rejection notice.
    fn draw(&mut self, game: &Game, notice: Option<String>) -> Result<()> {
        if self.clear_screen {
            console::clear(&mut self.output)?;
        }
        writeln!(self.output, "{}", BANNER)?;
        write!(self.output, "{}", game.board())?;
        if let Some(notice) = notice {
            writeln!(self.output, "\n{}", notice)?;
        }
        Ok(())
    }
}

/// Maps an engine rejection to console text in the player's 1-based
/// numbering.
fn rejection_notice(rejection: MoveError, choice: i64) -> String {
    match rejection {
        MoveError::OutOfBounds(_) => format!("Square {} is outside the board.", choice),
        MoveError::SquareOccupied(_) => format!("Square {} is already occupied.", choice),
        other => other.to_string(),
    }
}
