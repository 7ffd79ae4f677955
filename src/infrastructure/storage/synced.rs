//! Primary store backed by a synced folder
//!
//! A folder kept in sync across devices by an external provider (a cloud
//! drive client, for instance). The provider announces itself with a
//! `.host-version` marker file in the folder root; without a marker of a
//! supported version the folder is not used.

use super::{validate_key, PrimaryStore, StoreError, DEFAULT_MAX_VALUE_LEN};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs as async_fs;

/// Marker file holding the host version
pub const HOST_VERSION_FILE: &str = ".host-version";

/// Host version written by `urgelog init --sync-dir`
pub const CURRENT_HOST_VERSION: &str = "7.0";

#[derive(Debug, Clone)]
pub struct SyncedDirectory {
    root: PathBuf,
    max_value_len: usize,
}

impl SyncedDirectory {
    pub fn new(root: PathBuf) -> Self {
        SyncedDirectory {
            root,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
        }
    }

    pub fn with_max_value_len(mut self, max_value_len: usize) -> Self {
        self.max_value_len = max_value_len;
        self
    }

    /// Write the host version marker unless one is already present.
    pub fn ensure_marker(&self) -> std::io::Result<()> {
        let marker = self.root.join(HOST_VERSION_FILE);
        if !marker.exists() {
            fs::create_dir_all(&self.root)?;
            fs::write(marker, format!("{}\n", CURRENT_HOST_VERSION))?;
        }
        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl PrimaryStore for SyncedDirectory {
    fn host_version(&self) -> Option<String> {
        fs::read_to_string(self.root.join(HOST_VERSION_FILE))
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|version| !version.is_empty())
    }

    fn supports_storage(&self) -> bool {
        self.root.is_dir()
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match async_fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;

        let len = value.chars().count();
        if len > self.max_value_len {
            return Err(StoreError::CapacityExceeded {
                len,
                max: self.max_value_len,
            });
        }

        let temp = crate::infrastructure::fs::temp_path_for(&path);
        let written = match async_fs::write(&temp, value).await {
            Ok(()) => async_fs::rename(&temp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = async_fs::remove_file(&temp).await;
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}
