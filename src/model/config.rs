//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::profile::DEFAULT_CANDIDATES;
use crate::error::{Result, ShenvError};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SHENV_CONFIG";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Home directory override; `HOME` is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
    #[serde(default)]
    pub profiles: ProfilesConfig,
    #[serde(default)]
    pub parse: ParseConfig,
}

/// Which files count as shell profiles
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfilesConfig {
    /// Filenames relative to the home directory, in discovery order
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        ProfilesConfig {
            candidates: default_candidates(),
        }
    }
}

/// Declaration parsing options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ParseConfig {
    /// Keep `export NAME` lines without `=` as opaque text instead of dropping them on save
    #[serde(default)]
    pub preserve_malformed: bool,
}

impl Config {
    /// Get the shenv configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("shenv")
    }

    /// Get the configuration file path; `SHENV_CONFIG` overrides the default location
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ShenvError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| ShenvError::Config { path, message })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
