//! Game configuration loaded from TOML.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark played by the human. The AI plays the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Name shown for the human in the final message.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the AI in the final message.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Colour marks when rendering the board.
    #[serde(default)]
    color: bool,
}

fn default_human_mark() -> Player {
    Player::X
}

fn default_human_name() -> String {
    "User".to_string()
}

fn default_ai_name() -> String {
    "AI".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            human_name: default_human_name(),
            ai_name: default_ai_name(),
            color: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, mark: Player) -> Self {
        self.human_mark = mark;
        self
    }

    /// Enables or disables coloured marks.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Mark played by the AI.
    pub fn ai_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_name.trim().is_empty() || self.ai_name.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        if self.human_name == self.ai_name {
            return Err(ConfigError::new(format!(
                "Human and AI share the name '{}'",
                self.human_name
            )));
        }
        Ok(())
    }
}

/// A game config that could not be read, parsed or accepted.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid game config: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong with the config.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// File that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a config error located at the caller.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
