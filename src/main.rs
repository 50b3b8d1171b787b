//! Mancala - terminal front-end for the Kalah rules engine.

mod cli;

use std::io::{self, Cursor};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use mancala_engine::{Board, ConsoleShell};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout().lock();
    match cli.script() {
        Some(script) => {
            info!(moves = cli.moves.as_ref().map_or(0, Vec::len), "playing scripted game");
            ConsoleShell::new(Board::new(), Cursor::new(script), stdout).run()?;
        }
        None => {
            info!("starting interactive game");
            ConsoleShell::new(Board::new(), io::stdin().lock(), stdout).run()?;
        }
    }

    Ok(())
}
