//! Terminal screen control.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clears the terminal and homes the cursor.
pub fn clear<W: Write>(output: &mut W) -> io::Result<()> {
    execute!(output, Clear(ClearType::All), MoveTo(0, 0))
}
