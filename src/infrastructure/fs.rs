//! Filesystem helpers for atomic writes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temp file path next to `destination`, hidden and suffixed `.tmp`
pub fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    destination.with_file_name(format!(".{}.tmp", name))
}

/// Write `contents` to `destination` through a temp file and a rename, so
/// readers see either the old or the new contents.
pub fn write_atomic(destination: &Path, contents: &str) -> io::Result<()> {
    let temp = temp_path_for(destination);
    fs::write(&temp, contents)?;
    rename_with_fallback(&temp, destination)
}

/// Rename a file, removing the destination and retrying when the platform
/// refuses to rename over an existing file. The temp file is removed if the
/// retry fails too.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/data/store/journal_entries.json"));
        assert_eq!(
            temp,
            PathBuf::from("/data/store/.journal_entries.json.tmp")
        );
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("value.json");

        write_atomic(&dest, "first").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "first");
        assert!(!temp_path_for(&dest).exists());
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("value.json");

        fs::write(&dest, "old").unwrap();
        write_atomic(&dest, "new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("value.json");
        assert!(write_atomic(&dest, "x").is_err());
    }
}
