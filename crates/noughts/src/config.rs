//! Front end configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// What a cell input does once the game has been won or drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GameOverPolicy {
    /// Start a new game straight away.
    #[default]
    #[display("reset")]
    Reset,
    /// Report that the game is over; `new` starts another.
    #[display("error")]
    Error,
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Behaviour of cell inputs after the game ends.
    #[serde(default)]
    on_game_over: GameOverPolicy,

    /// Colour marks and highlight the winning line.
    #[serde(default = "default_true")]
    color: bool,

    /// Print usage when an interactive game starts.
    #[serde(default = "default_true")]
    show_help: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            on_game_over: GameOverPolicy::default(),
            color: true,
            show_help: true,
        }
    }
}

impl ConsoleConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(on_game_over = %config.on_game_over, "Config loaded");
        Ok(config)
    }

    /// Resolves the effective configuration for a command line.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    /// Flags override file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(policy) = cli.on_game_over {
            self.on_game_over = policy;
        }
        if cli.no_color {
            self.color = false;
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(ConsoleConfig::from_toml("").unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_parses_fields() {
        let config = ConsoleConfig::from_toml(
            "on_game_over = \"error\"\ncolor = false\nshow_help = false\n",
        )
        .unwrap();
        assert_eq!(*config.on_game_over(), GameOverPolicy::Error);
        assert!(!*config.color());
        assert!(!*config.show_help());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = ConsoleConfig::from_toml("on_game_over = \"explode\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let cli = Cli::try_parse_from(["noughts", "--config", "/nonexistent/noughts.toml"])
            .unwrap();
        let err = ConsoleConfig::resolve(&cli).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::try_parse_from(["noughts", "--on-game-over", "error", "--no-color"])
            .unwrap();
        let mut config = ConsoleConfig::default();
        config.apply_overrides(&cli);
        assert_eq!(*config.on_game_over(), GameOverPolicy::Error);
        assert!(!*config.color());
        assert!(*config.show_help());
    }
}
