//! Local fallback store: one JSON file per key

use super::{validate_key, FallbackStore, StoreError};
use crate::infrastructure::fs::write_atomic;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: PathBuf) -> Self {
        DirectoryStore { root }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl FallbackStore for DirectoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        write_atomic(&path, value)?;
        Ok(())
    }
}
