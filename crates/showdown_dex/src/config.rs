//! Configuration loading and discovery for `dex.toml`.
//!
//! ```toml
//! resource_prefix = "https://play.pokemonshowdown.com/"
//! audio = "ogg"
//! afd = false
//! data_dir = "data"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the config file searched for on disk.
pub const CONFIG_FILE_NAME: &str = "dex.toml";

/// Default root that every sprite and icon URL hangs off.
pub const DEFAULT_RESOURCE_PREFIX: &str = "https://play.pokemonshowdown.com/";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse dex.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Audio container the host can play. Cries are published in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Ogg,
}

impl AudioFormat {
    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => ".mp3",
            AudioFormat::Ogg => ".ogg",
        }
    }
}

/// Runtime configuration for a [`Dex`](crate::Dex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DexConfig {
    /// Prefix for every sprite URL (must end with `/`)
    pub resource_prefix: String,
    /// Cry audio format
    pub audio: AudioFormat,
    /// Server-wide April Fool's sprites
    pub afd: bool,
    /// Directory holding the JSON data tables
    pub data_dir: Option<PathBuf>,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
            audio: AudioFormat::default(),
            afd: false,
            data_dir: None,
        }
    }
}

impl DexConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let mut config: DexConfig = toml::from_str(text)?;
        if !config.resource_prefix.ends_with('/') {
            config.resource_prefix.push('/');
        }
        Ok(config)
    }

    /// Load a config file from disk.
    ///
    /// A relative `data_dir` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        if let (Some(dir), Some(parent)) = (config.data_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.data_dir = Some(parent.join(dir));
            }
        }
        Ok(config)
    }

    /// Load the discovered config, or fall back to defaults when none exists.
    pub fn discover() -> Result<Self, ConfigError> {
        match find_config() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading dex config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Find dex.toml by walking up from the current working directory, then in
/// `$XDG_CONFIG_HOME/showdown-dex/` (or `~/.config/showdown-dex/`).
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }
    find_xdg_config()
}

/// Find dex.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("showdown-dex").join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}

/// Find dex.toml by walking up from `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}
