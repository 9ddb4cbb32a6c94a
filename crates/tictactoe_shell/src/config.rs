//! Game configuration: TOML file plus command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{DEFAULT_BOARD_SIZE, GameEngine, Player};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Largest board the shell will build.
pub const MAX_BOARD_SIZE: usize = 32;

/// Board size and players for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<Player>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_players() -> Vec<Player> {
    GameEngine::standard().players().to_vec()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            board_size = config.board_size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the explicit `path`, else [`DEFAULT_CONFIG_PATH`] if it exists,
    /// else the standard game.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using standard game");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides. An empty `players` list keeps the file's players.
    #[instrument(skip(self, players))]
    pub fn with_overrides(mut self, board_size: Option<usize>, players: Vec<Player>) -> Self {
        if let Some(size) = board_size {
            debug!(size, "Overriding board size");
            self.board_size = size;
        }
        if !players.is_empty() {
            debug!(count = players.len(), "Overriding players");
            self.players = players;
        }
        self
    }

    /// Builds an engine from this configuration.
    ///
    /// Board sizes above [`MAX_BOARD_SIZE`] are rejected.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> Result<GameEngine, ConfigError> {
        check_board_size(self.board_size)?;
        GameEngine::new(self.players.clone(), self.board_size)
            .map_err(|e| ConfigError::new(e.kind.to_string()))
    }
}

/// Rejects board sizes above [`MAX_BOARD_SIZE`].
pub fn check_board_size(size: usize) -> Result<(), ConfigError> {
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::new(format!(
            "Board size {} exceeds the maximum of {}",
            size, MAX_BOARD_SIZE
        )));
    }
    Ok(())
}

/// Parses a `LABEL:COLOR` player spec, e.g. `X:red`.
///
/// A spec without a colon gets the color `white`.
#[instrument]
pub fn parse_player_spec(spec: &str) -> Result<Player, ConfigError> {
    let (label, color) = spec.split_once(':').unwrap_or((spec, "white"));
    let label = label.trim();
    if label.is_empty() {
        return Err(ConfigError::new(format!(
            "Player spec {:?} has an empty label",
            spec
        )));
    }
    Ok(Player::new(label, color.trim()))
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
