//! Game configuration loaded from TOML and command-line overrides.

use crate::error::ConfigError;
use crate::games::tictactoe::{DEFAULT_SIZE, MAX_SIZE, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings fixed for the lifetime of a game session.
///
/// ```toml
/// size = 3
/// required_run = 3
/// first_mark = "X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board dimension N.
    #[serde(default = "default_size")]
    size: u8,

    /// Marks in one line needed to win. Defaults to `size`.
    #[serde(default)]
    #[getter(skip)]
    required_run: Option<u8>,

    /// Mark that moves first.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,
}

#[instrument]
fn default_size() -> u8 {
    DEFAULT_SIZE
}

#[instrument]
fn default_first_mark() -> Mark {
    Mark::X
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(size: u8, required_run: Option<u8>, first_mark: Mark) -> Result<Self, ConfigError> {
        let config = Self {
            size,
            required_run,
            first_mark,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(size = config.size, required_run = config.required_run(), "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// Overriding the size without a run length resets the run length to
    /// the new size.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<u8>,
        required_run: Option<u8>,
        first_mark: Option<Mark>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            if size != self.size {
                self.required_run = None;
            }
            self.size = size;
        }
        if required_run.is_some() {
            self.required_run = required_run;
        }
        if let Some(mark) = first_mark {
            self.first_mark = mark;
        }
        self.validate()?;
        Ok(self)
    }

    /// Marks in one line needed to win.
    pub fn required_run(&self) -> u8 {
        self.required_run.unwrap_or(self.size)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::new(format!(
                "Board size must be from 1 to {}, got {}",
                MAX_SIZE, self.size
            )));
        }
        let run = self.required_run();
        if !(1..=self.size).contains(&run) {
            return Err(ConfigError::new(format!(
                "Required run must be from 1 to {}, got {}",
                self.size, run
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            required_run: None,
            first_mark: default_first_mark(),
        }
    }
}
