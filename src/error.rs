//! Error types for urgelog

use crate::infrastructure::storage::BackendKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for urgelog
#[derive(Debug, Error)]
pub enum UrgelogError {
    #[error("Journal not initialized: {0}")]
    NotInitialized(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// A write was rejected by the active backend. Never retried here.
    #[error("Failed to save entries to {backend} storage: {reason}")]
    StorageWrite { backend: BackendKind, reason: String },

    /// A read failed. The repository maps this to an empty journal.
    #[error("Failed to read entries from {backend} storage: {reason}")]
    StorageRead { backend: BackendKind, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UrgelogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UrgelogError::NotInitialized(_) => 2,
            UrgelogError::InvalidInput(_) => 3,
            UrgelogError::EntryNotFound(_) => 4,
            UrgelogError::StorageWrite { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            UrgelogError::NotInitialized(path) => {
                format!(
                    "Journal not initialized: {}\n\n\
                    Suggestions:\n\
                    • Run 'urgelog init' to create a new journal\n\
                    • Pass --home to point at an existing journal\n\
                    • Set URGELOG_HOME environment variable to your journal path",
                    path.display()
                )
            }
            UrgelogError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'urgelog list' to see entry ids\n\
                    • The entry may have been deleted from another device",
                    id
                )
            }
            UrgelogError::StorageWrite { .. } => {
                format!(
                    "{}\n\n\
                    Your entry was not saved. Nothing was retried.\n\
                    Suggestions:\n\
                    • Run the same command again\n\
                    • Check 'urgelog backend' to see which storage is active",
                    self
                )
            }
            UrgelogError::Config(msg) => {
                if msg.contains("Invalid locale") {
                    format!(
                        "{}\n\n\
                        Valid locales: en, ru\n\
                        Example: urgelog config locale ru",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using UrgelogError
pub type Result<T> = std::result::Result<T, UrgelogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_suggestion() {
        let err = UrgelogError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("urgelog init"));
        assert!(msg.contains("URGELOG_HOME"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = UrgelogError::EntryNotFound("123-abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'123-abc'"));
        assert!(msg.contains("urgelog list"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_storage_write_mentions_backend() {
        let err = UrgelogError::StorageWrite {
            backend: BackendKind::Primary,
            reason: "quota exceeded".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("primary"));
        assert!(msg.contains("quota exceeded"));
        assert!(msg.contains("not saved"));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_config_invalid_locale_suggestions() {
        let err = UrgelogError::Config("Invalid locale: 'de'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("en, ru"));
        assert!(msg.contains("urgelog config locale ru"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = UrgelogError::InvalidInput("empty id".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Invalid input: empty id");
        assert_eq!(err.exit_code(), 3);
    }
}
