//! Configuration management for the block decoration engine.
//!
//! Parses `deco.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "deco.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the lazy-loading flag for iframes.
    pub lazy_loading: Option<bool>,
    /// Override the Twitter timeline height.
    pub timeline_height: Option<u32>,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Embed iframe sizing.
    pub embed: EmbedConfig,
    /// Twitter timeline widget options.
    pub twitter: TwitterConfig,
    /// Block enablement.
    pub blocks: BlocksConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Embed iframe sizing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Maximum width of Instagram iframes, in pixels.
    pub max_width: u32,
    /// Minimum height of Instagram iframes, in pixels.
    pub min_height: u32,
    /// YouTube iframe width, in pixels.
    pub youtube_width: u32,
    /// YouTube iframe height, in pixels.
    pub youtube_height: u32,
    /// Minimum height of generic iframes, in pixels.
    pub generic_min_height: u32,
    /// Whether iframes carry `loading="lazy"`.
    pub lazy_loading: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            max_width: 540,
            min_height: 600,
            youtube_width: 560,
            youtube_height: 315,
            generic_min_height: 400,
            lazy_loading: true,
        }
    }
}

/// Twitter timeline widget configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// Widget height in pixels.
    pub timeline_height: u32,
    /// Widget chrome flags.
    pub chrome: String,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            timeline_height: 600,
            chrome: "noheader nofooter noborders".to_owned(),
        }
    }
}

/// Block enablement configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BlocksConfig {
    /// Allow-list of decorator names; `None` enables all built-ins.
    pub enabled: Option<Vec<String>>,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Otherwise
    /// `deco.toml` is discovered by walking up from the current
    /// directory; when none is found, defaults apply. CLI settings are
    /// applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing (explicit path
    /// only), unreadable, not valid TOML, or fails validation.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let discovered = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => std::env::current_dir()
                .ok()
                .and_then(|dir| discover(&dir)),
        };

        let mut config = match &discovered {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let mut config: Self = toml::from_str(&raw)?;
                config.config_path = Some(path.clone());
                config
            }
            None => Self::default(),
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string (no discovery, no CLI).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on invalid TOML or failed validation.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(lazy_loading) = cli.lazy_loading {
            self.embed.lazy_loading = lazy_loading;
        }
        if let Some(height) = cli.timeline_height {
            self.twitter.timeline_height = height;
        }
    }

    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a dimension is zero or
    /// the chrome string is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_zero(self.embed.max_width, "embed.max_width")?;
        require_non_zero(self.embed.min_height, "embed.min_height")?;
        require_non_zero(self.embed.youtube_width, "embed.youtube_width")?;
        require_non_zero(self.embed.youtube_height, "embed.youtube_height")?;
        require_non_zero(self.embed.generic_min_height, "embed.generic_min_height")?;
        require_non_zero(self.twitter.timeline_height, "twitter.timeline_height")?;
        if self.twitter.chrome.trim().is_empty() {
            return Err(ConfigError::Validation(
                "twitter.chrome cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Walk up from `start` looking for the config file.
fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

/// Require a dimension field to be non-zero.
fn require_non_zero(value: u32, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!("{field} must be non-zero")));
    }
    Ok(())
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}
