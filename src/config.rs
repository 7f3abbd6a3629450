//! Game configuration loaded from TOML.

use crate::session::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Difficulty;
use tracing::{debug, info, instrument};

/// Default display name for the X side.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";
/// Default display name for the O side in player-vs-player games.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";
/// Default display name for the computer.
pub const DEFAULT_COMPUTER_NAME: &str = "Computer";

/// Settings for a game session.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Whether O is a second human or the computer.
    mode: GameMode,

    /// Name of the X player.
    player1_name: String,

    /// Name of the human O player.
    player2_name: String,

    /// Name of the computer O player.
    computer_name: String,

    /// Computer difficulty tier.
    difficulty: Difficulty,

    /// Seed for the computer's random choices; random when absent.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
            computer_name: DEFAULT_COMPUTER_NAME.to_string(),
            difficulty: Difficulty::default(),
            seed: None,
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the X player's name.
    pub fn with_player1_name(mut self, name: impl Into<String>) -> Self {
        self.player1_name = name.into();
        self
    }

    /// Overrides the O player's name for the current mode.
    pub fn with_opponent_name(mut self, name: impl Into<String>) -> Self {
        match self.mode {
            GameMode::PlayerVsPlayer => self.player2_name = name.into(),
            GameMode::PlayerVsComputer => self.computer_name = name.into(),
        }
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
