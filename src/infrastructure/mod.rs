//! Infrastructure layer - Storage backends and configuration

pub mod config;
pub mod fs;
pub mod storage;

pub use config::Config;
pub use storage::{
    BackendKind, DirectoryStore, FallbackStore, MemoryStore, PrimaryStore, StorageBackend,
    SyncedDirectory,
};
