//! Initialize journal use case

use crate::domain::Locale;
use crate::error::{Result, UrgelogError};
use crate::infrastructure::{Config, SyncedDirectory};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Initialize a new journal in `home`.
///
/// Creates the local store directory and writes `config.toml`. When
/// `sync_dir` is given, the folder is created if needed and marked as a
/// synced host so it becomes the primary store.
pub fn init(home: &Path, locale: Locale, sync_dir: Option<PathBuf>) -> Result<Config> {
    if home.join(crate::infrastructure::config::CONFIG_FILE).exists() {
        return Err(UrgelogError::Config(format!(
            "Journal already initialized: {}",
            home.display()
        )));
    }

    fs::create_dir_all(Config::store_dir(home))?;

    if let Some(dir) = &sync_dir {
        SyncedDirectory::new(dir.clone()).ensure_marker()?;
    }

    let config = Config::new(locale, sync_dir);
    config.save_to_dir(home)?;

    info!(home = %home.display(), locale = %locale, "Initialized journal");
    Ok(config)
}
