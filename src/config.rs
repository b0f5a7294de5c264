// src/config.rs
// Configuration loading and defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

fn default_lang() -> String {
    "en".to_string()
}
fn default_max_items() -> usize {
    30
}
fn default_request_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Language code baked into the document URL.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Canteen used when the command names none.
    #[serde(default)]
    pub default_canteen: Option<String>,
    /// Cap on menu lines per reply.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Fetch timeout, seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            default_canteen: None,
            max_items: default_max_items(),
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// An explicit path must exist and parse. Without one, a missing
    /// file at the default location just means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Platform config dir, e.g. `~/.config/mensa_scrape/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mensa_scrape").map(|dirs| dirs.config_dir().join("config.toml"))
}
