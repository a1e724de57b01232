//! Configuration management for linediff
//!
//! Supports these sections:
//! - [render] - terminal output settings
//! - [load] - document loading limits
//! - [log] - logging level and destination

use crate::error::{ConfigError, ConfigResult};
use crate::get_config_home;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Name of the repo-local configuration file
pub const REPO_CONFIG_FILE: &str = ".linediff.toml";

/// Resolved configuration with every section filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub load: LoadConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            render: RenderConfig::default(),
            load: LoadConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// One configuration file as written on disk. Sections left out of the file
/// keep whatever an earlier layer set.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    version: Option<String>,

    #[serde(default)]
    render: Option<RenderConfig>,

    #[serde(default)]
    load: Option<LoadConfig>,

    #[serde(default)]
    log: Option<LogConfig>,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    /// Resolve to a yes/no answer given whether the output is a terminal.
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{}', expected one of: auto, always, never",
                other
            )),
        }
    }
}

/// Terminal rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Print `\ No newline at end of file` after unterminated lines
    #[serde(default = "default_true")]
    pub newline_marker: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            newline_marker: true,
        }
    }
}

/// Document loading settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Largest document accepted, in bytes. 0 disables the limit.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

impl LoadConfig {
    /// The effective limit, `None` when unlimited.
    pub fn limit(&self) -> Option<u64> {
        (self.max_document_bytes > 0).then_some(self.max_document_bytes)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_document_bytes() -> u64 {
    16 * 1024 * 1024
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Get the default config directory path
    /// Respects XDG_CONFIG_HOME environment variable
    pub fn get_config_dir() -> Option<PathBuf> {
        get_config_home().map(|h| h.join("linediff"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config (~/.config/linediff/config.toml)
    /// 3. Repo config (.linediff.toml)
    /// 4. Explicit config file
    pub fn load(custom_config: Option<&str>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(config_dir) = Self::get_config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                config = config.merge_from_file(&global_config)?;
            }
        }

        let repo_config = Path::new(REPO_CONFIG_FILE);
        if repo_config.exists() {
            config = config.merge_from_file(repo_config)?;
        }

        if let Some(custom_config) = custom_config {
            let custom_path = expand_path(custom_config);
            config = config.merge_from_file(Path::new(&custom_path))?;
        }

        config.log.file = config.log.file.as_deref().map(expand_path);

        Ok(config)
    }

    /// Layer the sections present in `path` on top of this configuration.
    pub fn merge_from_file(self, path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file =
            toml::from_str::<ConfigFile>(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!(path = %path.display(), "loaded config file");
        Ok(self.merge(file))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(version) = other.version.filter(|v| !v.is_empty()) {
            self.version = version;
        }
        if let Some(render) = other.render {
            self.render = render;
        }
        if let Some(load) = other.load {
            self.load = load;
        }
        if let Some(log) = other.log {
            self.log = log;
        }
        self
    }
}

/// `$VAR` or `${VAR}`
static ENV_VAR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))").ok()
});

/// Expand a leading `~` and `$VAR`/`${VAR}` references in a configured path.
/// Unset variables are left as written.
pub fn expand_path(path: &str) -> String {
    let path = match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            format!("{}{}", home.display(), rest)
        }
        _ => path.to_string(),
    };

    match ENV_VAR.as_ref() {
        Some(re) if path.contains('$') => re
            .replace_all(&path, |caps: &Captures| {
                let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
            })
            .into_owned(),
        _ => path,
    }
}
