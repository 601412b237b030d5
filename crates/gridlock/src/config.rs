//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridlock_tictactoe::{Difficulties, Difficulty, GameMode, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session. Every field has a default, so an empty
/// file (or no file) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Which seats are computer-controlled.
    #[serde(default)]
    mode: GameMode,

    /// Difficulty of X when computer-controlled.
    #[serde(default)]
    x_difficulty: Difficulty,

    /// Difficulty of O when computer-controlled.
    #[serde(default)]
    o_difficulty: Difficulty,

    /// Seat the person takes against the computer.
    #[serde(default = "default_human_seat")]
    human_seat: Player,

    /// Pause before a computer move is shown, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Seed for the random tiers; fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Where interactive play writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_human_seat() -> Player {
    Player::X
}

fn default_ai_delay_ms() -> u64 {
    600
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gridlock.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            x_difficulty: Difficulty::default(),
            o_difficulty: Difficulty::default(),
            human_seat: default_human_seat(),
            ai_delay_ms: default_ai_delay_ms(),
            seed: None,
            log_file: default_log_file(),
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

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Difficulty pair for a new session.
    pub fn difficulties(&self) -> Difficulties {
        Difficulties::new(self.x_difficulty, self.o_difficulty)
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(x) = overrides.x_difficulty {
            self.x_difficulty = x;
        }
        if let Some(o) = overrides.o_difficulty {
            self.o_difficulty = o;
        }
        if let Some(seat) = overrides.human_seat {
            self.human_seat = seat;
        }
        if let Some(delay) = overrides.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Game mode.
    pub mode: Option<GameMode>,
    /// X difficulty.
    pub x_difficulty: Option<Difficulty>,
    /// O difficulty.
    pub o_difficulty: Option<Difficulty>,
    /// Human seat.
    pub human_seat: Option<Player>,
    /// AI delay in milliseconds.
    pub ai_delay_ms: Option<u64>,
    /// Random seed.
    pub seed: Option<u64>,
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
