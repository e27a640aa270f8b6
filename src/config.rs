use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::sources::github::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};

/// Repository whose tags are resolved when nothing else is configured
pub const DEFAULT_REPOSITORY: &str = "wailsapp/wails";

/// Tag line resolved when nothing else is configured
pub const DEFAULT_LINE_PREFIX: &str = "v2";

/// Environment variable holding a GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Tool configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub source: SourceConfig,
    pub line_prefix: String,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            line_prefix: DEFAULT_LINE_PREFIX.to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Where tags and release notes come from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    pub base_url: String,
    /// `owner/name` of the GitHub repository
    pub repository: String,
    pub token: Option<String>,
    /// Upper bound on tag pages fetched per listing
    pub max_pages: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            token: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Log to this file instead of stderr
    pub file: Option<PathBuf>,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load the config from `path`, or from [`config_path`] when `path` is `None`
    ///
    /// A missing default config file yields the defaults; a missing explicit one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_env_token(std::env::var(TOKEN_ENV).ok()))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fill in the token from the environment when the file does not set one
    fn with_env_token(mut self, env_token: Option<String>) -> Self {
        if self.source.token.is_none() {
            self.source.token = env_token.filter(|t| !t.is_empty());
        }
        self
    }
}

/// Returns the path to the config directory for release-tags.
/// Uses $XDG_CONFIG_HOME/release-tags if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/release-tags,
/// or ./release-tags if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("release-tags")
}
