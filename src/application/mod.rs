//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;
pub mod repository;

pub use journal::LocalRepository;
pub use manage_config::ConfigService;
pub use repository::EntryRepository;
