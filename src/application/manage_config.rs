//! Config management use case

use crate::domain::Locale;
use crate::error::{Result, UrgelogError};
use crate::infrastructure::{Config, SyncedDirectory};
use std::path::PathBuf;
use std::str::FromStr;

const VALID_KEYS: &str = "locale, sync_dir, max_value_len";

/// Service for managing journal configuration
pub struct ConfigService {
    home: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the journal in `home`
    pub fn new(home: PathBuf) -> Self {
        ConfigService { home }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.home)?;

        match key {
            "locale" => Ok(config.locale.to_string()),
            "sync_dir" => Ok(config
                .sync_dir
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()),
            "max_value_len" => Ok(config.max_value_len.to_string()),
            _ => Err(UrgelogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value. An empty `sync_dir` turns the primary store off.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.home)?;

        match key {
            "locale" => {
                config.locale = Locale::from_str(value).map_err(UrgelogError::Config)?;
            }
            "sync_dir" => {
                if value.trim().is_empty() {
                    config.sync_dir = None;
                } else {
                    let dir = PathBuf::from(value);
                    SyncedDirectory::new(dir.clone()).ensure_marker()?;
                    config.sync_dir = Some(dir);
                }
            }
            "max_value_len" => {
                let len: usize = value.parse().map_err(|_| {
                    UrgelogError::Config(format!(
                        "Invalid max_value_len: '{}'. Expected a positive number",
                        value
                    ))
                })?;
                if len == 0 {
                    return Err(UrgelogError::Config(
                        "Invalid max_value_len: '0'. Expected a positive number".to_string(),
                    ));
                }
                config.max_value_len = len;
            }
            _ => {
                return Err(UrgelogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        config.save_to_dir(&self.home)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.home)
    }
}
