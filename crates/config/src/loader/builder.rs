//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from a config file, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file reading (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder methods take precedence over environment variables when called after `from_env`.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{MAX_CHORD_TIMEOUT_MS, MIN_CHORD_TIMEOUT_MS};
use crate::keybind::{KeySequence, parse_key, parse_sequence, validate_overrides};
use crate::types::Config;

/// Configuration loader that merges file, environment and CLI settings.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    file_config: Option<Config>,
    chord_timeout_ms: Option<u64>,
    leader_key: Option<String>,
    toggle_key: Option<String>,
    data_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config file instead of the platform default.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Load the config file.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file is missing, unreadable or not valid JSON.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Apply `KEYDECK_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the chord timeout in milliseconds.
    pub fn with_chord_timeout_ms(mut self, millis: u64) -> Self {
        self.chord_timeout_ms = Some(millis);
        self
    }

    /// Override the chord leader key.
    pub fn with_leader_key(mut self, key: String) -> Self {
        self.leader_key = Some(key);
        self
    }

    /// Override the palette toggle key.
    pub fn with_toggle_key(mut self, key: String) -> Self {
        self.toggle_key = Some(key);
        self
    }

    /// Override the record data directory.
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_file_config(&mut self, config: Option<Config>) {
        self.file_config = config;
    }

    pub(crate) fn set_chord_timeout_ms(&mut self, millis: Option<u64>) {
        self.chord_timeout_ms = millis;
    }

    pub(crate) fn set_leader_key(&mut self, key: Option<String>) {
        self.leader_key = key;
    }

    pub(crate) fn set_toggle_key(&mut self, key: Option<String>) {
        self.toggle_key = key;
    }

    pub(crate) fn set_data_dir(&mut self, dir: Option<PathBuf>) {
        self.data_dir = dir;
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the chord timeout is out of range, the leader or
    /// toggle key is unusable, a limit is zero, or the keybinding overrides
    /// are invalid.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = self.file_config.unwrap_or_default();

        if let Some(millis) = self.chord_timeout_ms {
            config.palette.chord_timeout_ms = millis;
        }
        if let Some(key) = self.leader_key {
            config.palette.leader_key = key;
        }
        if let Some(key) = self.toggle_key {
            config.palette.toggle_key = key;
        }
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }

        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let palette = &config.palette;

    if !(MIN_CHORD_TIMEOUT_MS..=MAX_CHORD_TIMEOUT_MS).contains(&palette.chord_timeout_ms) {
        return Err(ConfigError::InvalidChordTimeout {
            message: format!(
                "must be between {} and {} ms (got {})",
                MIN_CHORD_TIMEOUT_MS, MAX_CHORD_TIMEOUT_MS, palette.chord_timeout_ms
            ),
        });
    }

    let leader = parse_key(&palette.leader_key).map_err(|e| ConfigError::InvalidLeaderKey {
        key: palette.leader_key.clone(),
        message: e.to_string(),
    })?;
    if !leader.modifiers.is_empty() {
        return Err(ConfigError::InvalidLeaderKey {
            key: palette.leader_key.clone(),
            message: "the leader key cannot carry modifiers".to_string(),
        });
    }

    let toggle = parse_key(&palette.toggle_key).map_err(|e| ConfigError::InvalidToggleKey {
        key: palette.toggle_key.clone(),
        message: e.to_string(),
    })?;
    if toggle.modifiers.count() != 1 {
        return Err(ConfigError::InvalidToggleKey {
            key: palette.toggle_key.clone(),
            message: "the toggle needs exactly one modifier so it works while typing".to_string(),
        });
    }

    if palette.browse_limit == 0 {
        return Err(ConfigError::InvalidLimit {
            field: "browse_limit",
            message: "must be at least 1".to_string(),
        });
    }
    if palette.search_limit == 0 {
        return Err(ConfigError::InvalidLimit {
            field: "search_limit",
            message: "must be at least 1".to_string(),
        });
    }

    validate_overrides(&config.keybindings.overrides)?;

    for (action, key_str) in &config.keybindings.overrides {
        let Ok(KeySequence::Single(key)) = parse_sequence(key_str) else {
            continue;
        };
        if key == leader {
            return Err(ConfigError::InvalidValue {
                var: format!("keybindings.{}", action),
                message: format!("'{}' is the chord leader and can never fire", key_str),
            });
        }
        if key == toggle {
            return Err(ConfigError::InvalidValue {
                var: format!("keybindings.{}", action),
                message: format!("'{}' already toggles the command palette", key_str),
            });
        }
    }

    Ok(())
}
