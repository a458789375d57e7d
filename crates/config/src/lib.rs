//! Configuration management for keydeck.
//!
//! This crate provides key-string parsing, configuration types and the
//! loader that merges config files, environment variables and CLI flags.

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{Config, KeybindAction, KeybindOverrides, PaletteConfig};
