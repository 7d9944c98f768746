//! gridtac - two-player N×N tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridtac::{Dimension, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr; stdout is the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let preset = cli.dimension.map(Dimension::new).transpose()?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), !cli.plain);
    let status = session.run(preset)?;
    info!(?status, "session complete");

    Ok(())
}
