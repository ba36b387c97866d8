//! Rewind - tic-tac-toe on an N×N board with time travel
//!
//! This library wraps the [`rewind_tictactoe`] game core with the pieces a
//! player touches: command-line parsing, TOML configuration, a headless
//! replay mode, and a terminal UI.
//!
//! # Example
//!
//! ```
//! use rewind::{BoardSize, replay, report};
//!
//! # fn main() -> anyhow::Result<()> {
//! let game = replay(BoardSize::new(3)?, &[0, 4, 1, 5, 2])?;
//! assert!(report(&game).contains("Winner: X"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod replay;

pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, MAX_TUI_SIZE};

// Crate-level exports - Headless replay
pub use replay::{replay, report};

// Crate-level exports - Game types
pub use rewind_tictactoe::{BoardSize, Game, MoveError, Player, Status};
