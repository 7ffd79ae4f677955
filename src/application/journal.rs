//! Open the journal stored under a home directory

use crate::application::repository::EntryRepository;
use crate::domain::Classifier;
use crate::error::Result;
use crate::infrastructure::{Config, DirectoryStore, StorageBackend, SyncedDirectory};
use std::path::Path;

/// Repository over the on-disk stores: the configured synced folder (if
/// any) as primary, the home's local store as fallback.
pub type LocalRepository = EntryRepository<Option<SyncedDirectory>, DirectoryStore>;

/// Load the config in `home` and build the repository it describes.
pub fn open(home: &Path) -> Result<LocalRepository> {
    let config = Config::load_from_dir(home)?;
    Ok(open_with_config(home, &config))
}

pub fn open_with_config(home: &Path, config: &Config) -> LocalRepository {
    let primary = config
        .sync_dir
        .as_ref()
        .map(|dir| SyncedDirectory::new(dir.clone()).with_max_value_len(config.max_value_len));
    let fallback = DirectoryStore::new(Config::store_dir(home));

    EntryRepository::new(
        StorageBackend::select(primary, fallback),
        Classifier::new(config.locale),
    )
}
