//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::{GameMode, Tier};
use tracing::{debug, info, instrument, warn};

/// Longest thinking delay accepted, in milliseconds.
pub const MAX_AI_DELAY_MS: u64 = 10_000;

/// Settings for one arena session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Starting game mode.
    mode: GameMode,

    /// Starting computer tier.
    tier: Tier,

    /// How long the computer "thinks" before moving.
    ai_delay_ms: u64,

    /// Seed for the computer's random choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            tier: Tier::default(),
            ai_delay_ms: 500,
            seed: None,
        }
    }
}

/// Values given on the command line, each replacing the file's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Game mode.
    pub mode: Option<GameMode>,
    /// Computer tier.
    pub tier: Option<Tier>,
    /// Thinking delay in milliseconds.
    pub ai_delay_ms: Option<u64>,
    /// Random seed.
    pub seed: Option<u64>,
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, tier = %config.tier, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::new(format!(
                "ai_delay_ms must be at most {}, got {}",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides and re-validates.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(tier) = overrides.tier {
            self.tier = tier;
        }
        if let Some(delay) = overrides.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// The thinking delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// The defaults rendered as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
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
