//! Game configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gomoku_board::{Board, BoardError, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Settings for one game session.
///
/// Every field has a default, so an empty file or no file at all is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Board rows.
    rows: usize,

    /// Board columns (may not exceed rows).
    cols: usize,

    /// Human player's name, recorded in the score table.
    #[setters(into)]
    player_name: String,

    /// Computer opponent's name.
    #[setters(into)]
    opponent_name: String,

    /// SQLite database file for scores.
    #[setters(into)]
    db_path: String,

    /// Place the human's first stone automatically on a center cell.
    auto_first_move: bool,

    /// Seed for the random opponent; entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,
}

/// Name used when the player leaves theirs blank.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            opponent_name: "Computer".to_string(),
            db_path: "data/gomoku.db".to_string(),
            auto_first_move: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player = %config.player_name, rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config.normalized())
    }

    /// Loads `path` if it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Trims names and substitutes defaults for blank ones.
    pub fn normalized(mut self) -> Self {
        self.player_name = self.player_name.trim().to_string();
        if self.player_name.is_empty() {
            self.player_name = DEFAULT_PLAYER_NAME.to_string();
        }
        self.opponent_name = self.opponent_name.trim().to_string();
        if self.opponent_name.is_empty() {
            self.opponent_name = Self::default().opponent_name;
        }
        self
    }

    /// Builds the empty board these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for unsupported sizes.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.cols)
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
