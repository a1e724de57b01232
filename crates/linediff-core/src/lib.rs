//! Core configuration and utilities for linediff
//!
//! - `config`: layered TOML configuration (`[render]`, `[load]`, `[log]`)
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;

use std::path::PathBuf;

pub use config::{
    expand_path, ColorMode, Config, LoadConfig, LogConfig, RenderConfig, CURRENT_CONFIG_VERSION,
    SUPPORTED_CONFIG_VERSIONS,
};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_logging;

/// Base configuration directory.
/// Respects XDG_CONFIG_HOME, falling back to `~/.config`.
pub fn get_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|h| h.join(".config")),
    }
}
