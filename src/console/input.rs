//! Robust integer input.

use std::io::{self, BufRead, Write};

/// Reads lines from `input` until one parses as an integer.
///
/// Malformed lines are discarded and a reprompt is written to `output`.
///
/// # Errors
///
/// Propagates I/O failures; an exhausted reader (EOF) is reported as
/// [`io::ErrorKind::UnexpectedEof`] rather than looping.
pub fn read_integer<R, W>(input: &mut R, output: &mut W) -> io::Result<i64>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                write!(output, "Invalid input, please enter a number: ")?;
                output.flush()?;
            }
        }
    }
}
