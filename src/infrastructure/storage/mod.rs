//! Key-value storage backends and backend selection
//!
//! Two kinds of store sit behind the journal:
//!
//! - a **primary** store, asynchronous and synced across devices, that the
//!   host may or may not offer ([`PrimaryStore`])
//! - a **fallback** store, synchronous, local and always present
//!   ([`FallbackStore`])
//!
//! [`StorageBackend`] decides which one serves the journal. The decision is
//! made once when it is constructed and only changes on an explicit
//! [`StorageBackend::refresh`]. Data is never migrated between the two: if
//! the host gains or loses the primary store between runs, the visible
//! journal switches with it.

pub mod directory;
pub mod memory;
pub mod synced;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;
pub use synced::SyncedDirectory;

use crate::error::{Result, UrgelogError};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Oldest host version that provides the primary store
pub const MIN_HOST_VERSION: HostVersion = HostVersion { major: 6, minor: 9 };

/// Default per-value capacity of the primary store, in characters
pub const DEFAULT_MAX_VALUE_LEN: usize = 4096;

const MAX_KEY_LEN: usize = 128;

/// Failure inside a single store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("value of {len} characters exceeds capacity of {max}")]
    CapacityExceeded { len: usize, max: usize },

    #[error("store is unavailable")]
    Unavailable,

    #[error("store rejected the write")]
    Rejected,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Host-provided store, synced across the user's devices.
pub trait PrimaryStore: Send + Sync {
    /// Version string reported by the host, if it reports one
    fn host_version(&self) -> Option<String>;

    /// Whether the host exposes the storage capability at all
    fn supports_storage(&self) -> bool;

    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = std::result::Result<Option<String>, StoreError>> + Send;

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = std::result::Result<(), StoreError>> + Send;
}

/// Local store that is always available.
pub trait FallbackStore: Send + Sync {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StoreError>;
}

/// A host that offers no primary store.
impl<P: PrimaryStore> PrimaryStore for Option<P> {
    fn host_version(&self) -> Option<String> {
        self.as_ref().and_then(|primary| primary.host_version())
    }

    fn supports_storage(&self) -> bool {
        self.as_ref().is_some_and(|primary| primary.supports_storage())
    }

    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        match self {
            Some(primary) => primary.get(key).await,
            None => Err(StoreError::Unavailable),
        }
    }

    async fn set(&self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        match self {
            Some(primary) => primary.set(key, value).await,
            None => Err(StoreError::Unavailable),
        }
    }
}

/// `major.minor` host version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for HostVersion {
    type Err = String;

    /// Accepts `7`, `6.9` and `6.10.2`; components past the minor are ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(|| format!("Invalid host version: '{}'", s))?;
        let minor = match parts.next() {
            Some(part) => part
                .parse()
                .map_err(|_| format!("Invalid host version: '{}'", s))?,
            None => 0,
        };
        Ok(HostVersion { major, minor })
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Whether `primary` can serve the journal right now.
///
/// Any detection problem (no version, unparseable version, missing
/// capability) counts as unavailable.
pub fn is_primary_available<P: PrimaryStore>(primary: &P) -> bool {
    let Some(raw) = primary.host_version() else {
        return false;
    };
    match raw.parse::<HostVersion>() {
        Ok(version) => version >= MIN_HOST_VERSION && primary.supports_storage(),
        Err(_) => false,
    }
}

/// Storage keys are limited to `[A-Za-z0-9_-]`, 1 to 128 characters.
pub fn validate_key(key: &str) -> std::result::Result<(), StoreError> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Which store a call was served by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Primary,
    Fallback,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Primary => write!(f, "primary"),
            BackendKind::Fallback => write!(f, "fallback"),
        }
    }
}

/// Primary/fallback pair with a pinned selection.
pub struct StorageBackend<P, F> {
    primary: P,
    fallback: F,
    use_primary: AtomicBool,
}

impl<P: PrimaryStore, F: FallbackStore> StorageBackend<P, F> {
    /// Build the pair and select a backend immediately.
    pub fn select(primary: P, fallback: F) -> Self {
        let backend = StorageBackend {
            primary,
            fallback,
            use_primary: AtomicBool::new(false),
        };
        backend.refresh();
        backend
    }

    /// Re-run the capability check and pin the result.
    pub fn refresh(&self) -> BackendKind {
        let available = is_primary_available(&self.primary);
        self.use_primary.store(available, Ordering::SeqCst);

        let kind = self.active();
        info!(
            backend = %kind,
            host_version = self.primary.host_version().as_deref().unwrap_or("none"),
            "Selected storage backend"
        );
        kind
    }

    /// The currently pinned backend
    pub fn active(&self) -> BackendKind {
        if self.use_primary.load(Ordering::SeqCst) {
            BackendKind::Primary
        } else {
            BackendKind::Fallback
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Read `key` from the given backend.
    ///
    /// Errors are returned, not swallowed; callers decide what a failed read
    /// means.
    pub async fn read(&self, kind: BackendKind, key: &str) -> Result<Option<String>> {
        debug!(backend = %kind, key, "Reading key");
        let result = match validate_key(key) {
            Err(err) => Err(err),
            Ok(()) => match kind {
                BackendKind::Primary => self.primary.get(key).await,
                BackendKind::Fallback => self.fallback.get(key),
            },
        };
        result.map_err(|err| UrgelogError::StorageRead {
            backend: kind,
            reason: err.to_string(),
        })
    }

    /// Write `value` under `key` to the given backend. A failure is never
    /// redirected to the other backend.
    pub async fn write(&self, kind: BackendKind, key: &str, value: &str) -> Result<()> {
        debug!(backend = %kind, key, len = value.len(), "Writing key");
        let result = match validate_key(key) {
            Err(err) => Err(err),
            Ok(()) => match kind {
                BackendKind::Primary => self.primary.set(key, value).await,
                BackendKind::Fallback => self.fallback.set(key, value),
            },
        };
        result.map_err(|err| UrgelogError::StorageWrite {
            backend: kind,
            reason: err.to_string(),
        })
    }
}
