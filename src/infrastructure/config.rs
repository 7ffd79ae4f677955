//! Configuration management

use crate::domain::Locale;
use crate::error::{Result, UrgelogError};
use crate::infrastructure::storage::DEFAULT_MAX_VALUE_LEN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Local store directory inside the journal home
pub const STORE_DIR: &str = "store";

pub const HOME_ENV: &str = "URGELOG_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,

    /// Synced folder used as the primary store, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_dir: Option<PathBuf>,

    /// Per-value capacity of the primary store, in characters
    #[serde(default = "default_max_value_len")]
    pub max_value_len: usize,
}

fn default_max_value_len() -> usize {
    DEFAULT_MAX_VALUE_LEN
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            sync_dir: None,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new(locale: Locale, sync_dir: Option<PathBuf>) -> Self {
        Config {
            locale,
            sync_dir,
            ..Config::default()
        }
    }

    /// Load config from `config.toml` in the given journal home
    pub fn load_from_dir(home: &Path) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UrgelogError::NotInitialized(home.to_path_buf())
            } else {
                UrgelogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| UrgelogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to `config.toml` in the given journal home
    pub fn save_to_dir(&self, home: &Path) -> Result<()> {
        if !home.exists() {
            fs::create_dir_all(home)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| UrgelogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(home.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Directory of the local fallback store
    pub fn store_dir(home: &Path) -> PathBuf {
        home.join(STORE_DIR)
    }
}

/// Resolve the journal home: explicit path first (the CLI fills it from
/// `--home` or `URGELOG_HOME`), then the platform data directory.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    dirs::data_dir()
        .map(|dir| dir.join("urgelog"))
        .ok_or_else(|| {
            UrgelogError::Config(format!(
                "Cannot determine a data directory. Pass --home or set {}.",
                HOME_ENV
            ))
        })
}
