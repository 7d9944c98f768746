//! Console plumbing: robust integer input and screen control.

mod input;
mod screen;

pub use input::read_integer;
pub use screen::clear;
