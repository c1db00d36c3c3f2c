//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::{GameMode, Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Human vs human or human vs computer.
    #[serde(default)]
    mode: GameMode,

    /// Mark played by the computer in human-vs-computer mode.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Name of the first human player.
    #[serde(default = "default_player_one_name")]
    player_one_name: String,

    /// Name of the second human player.
    #[serde(default = "default_player_two_name")]
    player_two_name: String,

    /// Name shown for the computer.
    #[serde(default = "default_computer_name")]
    computer_name: String,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_player_one_name() -> String {
    "Player 1".to_string()
}

fn default_player_two_name() -> String {
    "Player 2".to_string()
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_mark: default_computer_mark(),
            computer_delay_ms: default_computer_delay_ms(),
            player_one_name: default_player_one_name(),
            player_two_name: default_player_two_name(),
            computer_name: default_computer_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        computer_mark: Option<Mark>,
        computer_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(mark) = computer_mark {
            self.computer_mark = mark;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
