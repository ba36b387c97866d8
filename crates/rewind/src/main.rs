//! Rewind - unified CLI
//!
//! Plays tic-tac-toe in the terminal, or replays a move list headlessly.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load_logged(
        cli.config.as_deref(),
        cli.size,
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        std::io::stderr,
    )?;

    match cli.command() {
        Command::Play => rewind::tui::run_tui(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Apply `moves` headlessly and print the result.
#[instrument(skip_all, fields(size = %config.size(), moves = moves.len()))]
fn run_replay(config: &GameConfig, moves: &[usize]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying moves");
    let game = rewind::replay(*config.size(), moves)?;
    print!("{}", rewind::report(&game));
    Ok(())
}
