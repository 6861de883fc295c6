//! Atomic file replacement.
//!
//! Environment files are written to `.{name}.tmp` next to the target, synced,
//! then renamed over the target. Readers never observe a half-written file.
//! Source and destination share a directory, so the rename stays on one
//! filesystem.

use crate::error::{EnvError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Atomically replace `path` with `content`, creating parent directories.
///
/// The content is written to a temporary sibling, synced to disk, then
/// renamed over the target, so the target is never partially written.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(EnvError::Io)` - On directory creation, write, sync or rename failure
///
/// # Example
///
/// ```no_run
/// use envfile::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new(".env"), b"KEY=value\n")?;
/// # Ok::<(), envfile::EnvError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| EnvError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    debug!(target = %path.display(), temp = %temp_path.display(), "atomic write");

    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        EnvError::io(path, e)
    })?;

    // Persist the directory entry as well; best effort.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        EnvError::io(
            target,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
        )
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| EnvError::io(path, e))?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            EnvError::io(path, e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".env");

        atomic_write(&file_path, b"A=1\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "A=1\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app.env");
        fs::write(&file_path, "OLD=1\n").unwrap();

        atomic_write(&file_path, b"NEW=2\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "NEW=2\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config").join("prod").join("app.env");

        atomic_write(&file_path, b"").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app.env");

        atomic_write(&file_path, b"A=1\n").unwrap();

        assert!(!temp_dir.path().join(".app.env.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/srv/app/.env")).unwrap();

        assert_eq!(temp, Path::new("/srv/app/..env.tmp"));
    }
}
