//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use rewind_tictactoe::BoardSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Largest board the terminal UI lays out.
pub const MAX_TUI_SIZE: usize = 12;

/// Settings fixed for the lifetime of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default)]
    size: BoardSize,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    #[new(value = "default_log_file()")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    #[new(value = "default_log_filter()")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = %config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config at `path`, or the default file if one exists.
    ///
    /// An explicit path must exist. Without one, a missing
    /// [`DEFAULT_CONFIG_PATH`] yields the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the config and applies a size override, logging to `writer`.
    ///
    /// Runs before the session's own subscriber exists, so it installs a
    /// scoped one for the duration of the load.
    pub fn load_logged<W>(
        path: Option<&Path>,
        size: Option<usize>,
        filter: EnvFilter,
        writer: W,
    ) -> Result<Self, ConfigError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let config = Self::load(path)?;
            match size {
                Some(size) => config.with_size(size),
                None => Ok(config),
            }
        })
    }

    /// Replaces the board size, validating it.
    #[instrument(skip(self))]
    pub fn with_size(mut self, size: usize) -> Result<Self, ConfigError> {
        self.size = BoardSize::new(size)
            .map_err(|e| ConfigError::new(format!("Invalid board size: {}", e)))?;
        Ok(self)
    }

    /// Board size, checked against what the terminal UI can draw.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn tui_size(&self) -> Result<BoardSize, ConfigError> {
        if self.size.get() > MAX_TUI_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is too large for the terminal UI (max {})",
                self.size, MAX_TUI_SIZE
            )));
        }
        Ok(self.size)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
