//! Command-line interface for gridtac.

use clap::Parser;

/// gridtac - two-player N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridtac")]
#[command(about = "Two-player N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (3-10); prompted for interactively when omitted
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub plain: bool,
}
