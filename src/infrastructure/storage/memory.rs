//! In-process key-value store
//!
//! Implements both store traits. Clones share state, so a handle kept by the
//! caller can flip availability or make writes fail while a repository holds
//! another handle.

use super::{FallbackStore, PrimaryStore, StoreError};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    values: Mutex<HashMap<String, String>>,
    host_version: Mutex<Option<String>>,
    no_storage: AtomicBool,
    fail_writes: AtomicBool,
    failing_reads: AtomicUsize,
    capacity: Mutex<Option<usize>>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    /// Empty store reporting no host version
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store reporting `version` as its host version
    pub fn with_host_version(version: &str) -> Self {
        let store = Self::new();
        store.set_host_version(Some(version));
        store
    }

    pub fn set_host_version(&self, version: Option<&str>) {
        *lock(&self.inner.host_version) = version.map(str::to_string);
    }

    pub fn set_supports_storage(&self, supported: bool) {
        self.inner.no_storage.store(!supported, Ordering::SeqCst);
    }

    /// Make every following write fail with [`StoreError::Rejected`]
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make the next `count` reads fail with an interrupted I/O error
    pub fn fail_next_reads(&self, count: usize) {
        self.inner.failing_reads.store(count, Ordering::SeqCst);
    }

    /// Limit values to `max` characters
    pub fn set_capacity(&self, max: Option<usize>) {
        *lock(&self.inner.capacity) = max;
    }

    /// Snapshot of a stored value, bypassing the traits
    pub fn value(&self, key: &str) -> Option<String> {
        lock(&self.inner.values).get(key).cloned()
    }

    /// Overwrite a stored value, bypassing the traits
    pub fn insert_raw(&self, key: &str, value: &str) {
        lock(&self.inner.values).insert(key.to_string(), value.to_string());
    }

    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let failing = self
            .inner
            .failing_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Interrupted,
                "read interrupted",
            )));
        }
        Ok(self.value(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected);
        }
        if let Some(max) = *lock(&self.inner.capacity) {
            let len = value.chars().count();
            if len > max {
                return Err(StoreError::CapacityExceeded { len, max });
            }
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

impl PrimaryStore for MemoryStore {
    fn host_version(&self) -> Option<String> {
        lock(&self.inner.host_version).clone()
    }

    fn supports_storage(&self) -> bool {
        !self.inner.no_storage.load(Ordering::SeqCst)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        tokio::task::yield_now().await;
        self.read(key)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::task::yield_now().await;
        self.write(key, value)
    }
}

impl FallbackStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.read(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let handle = store.clone();
        FallbackStore::set(&store, "k", "v").unwrap();
        assert_eq!(handle.value("k"), Some("v".to_string()));
    }

    #[test]
    fn test_fail_writes() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(matches!(
            FallbackStore::set(&store, "k", "v"),
            Err(StoreError::Rejected)
        ));
        assert_eq!(store.value("k"), None);
    }

    #[test]
    fn test_capacity_counts_chars() {
        let store = MemoryStore::new();
        store.set_capacity(Some(3));
        assert!(FallbackStore::set(&store, "k", "дом").is_ok());
        assert!(matches!(
            FallbackStore::set(&store, "k", "дома"),
            Err(StoreError::CapacityExceeded { len: 4, max: 3 })
        ));
    }

    #[test]
    fn test_fail_next_reads() {
        let store = MemoryStore::new();
        store.insert_raw("k", "v");
        store.fail_next_reads(1);
        assert!(matches!(
            FallbackStore::get(&store, "k"),
            Err(StoreError::Io(_))
        ));
        assert_eq!(
            FallbackStore::get(&store, "k").unwrap(),
            Some("v".to_string())
        );
    }

    #[tokio::test]
    async fn test_primary_interface() {
        let store = MemoryStore::with_host_version("7.0");
        assert_eq!(store.host_version(), Some("7.0".to_string()));
        assert!(store.supports_storage());
        PrimaryStore::set(&store, "k", "v").await.unwrap();
        assert_eq!(
            PrimaryStore::get(&store, "k").await.unwrap(),
            Some("v".to_string())
        );
    }
}
