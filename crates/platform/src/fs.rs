//! Blocking `std::fs` implementation of [`FilesystemOperations`].

use crate::filesystem::FilesystemOperations;
use assetsweep_errors::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Filesystem backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOperations for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot stat path, treating as absent");
                false
            }
        }
    }

    fn is_empty_dir(&self, path: &Path) -> bool {
        match fs::read_dir(path) {
            Ok(mut entries) => entries.next().is_none(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot list directory");
                false
            }
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(path).map_err(|e| StorageError::from_io_with_path(&e, path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), StorageError> {
        fs::rename(from, to).map_err(|e| {
            // a source that is still there means the destination was the problem
            let blamed = if fs::symlink_metadata(from).is_ok() { to } else { from };
            StorageError::from_io_with_path(&e, blamed)
        })
    }

    fn remove_file(&self, path: &Path) -> Result<(), StorageError> {
        fs::remove_file(path).map_err(|e| StorageError::from_io_with_path(&e, path))
    }

    fn remove_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::remove_dir(path).map_err(|e| StorageError::from_io_with_path(&e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_and_empty_dir() {
        let temp = TempDir::new().unwrap();
        let fs_ops = LocalFilesystem::new();

        let dir = temp.path().join("assets");
        assert!(!fs_ops.exists(&dir));
        assert!(!fs_ops.is_empty_dir(&dir));

        fs_ops.create_dir_all(&dir).unwrap();
        assert!(fs_ops.exists(&dir));
        assert!(fs_ops.is_empty_dir(&dir));

        std::fs::write(dir.join("a.png"), b"png").unwrap();
        assert!(!fs_ops.is_empty_dir(&dir));
    }

    #[test]
    fn test_remove_dir_refuses_non_empty() {
        let temp = TempDir::new().unwrap();
        let fs_ops = LocalFilesystem::new();
        let dir = temp.path().join("assets");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("a.png"), b"png").unwrap();

        assert!(fs_ops.remove_dir(&dir).is_err());
        assert!(dir.exists());
    }

    #[test]
    fn test_rename_missing_source_reports_path() {
        let temp = TempDir::new().unwrap();
        let fs_ops = LocalFilesystem::new();
        let from = temp.path().join("missing.png");

        let err = fs_ops.rename(&from, &temp.path().join("b.png")).unwrap_err();
        assert!(matches!(err, StorageError::PathNotFound { .. }));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_rename_into_blocked_destination_reports_destination() {
        let temp = TempDir::new().unwrap();
        let fs_ops = LocalFilesystem::new();
        let from = temp.path().join("assets/pic.jpg");
        std::fs::create_dir(temp.path().join("assets")).unwrap();
        std::fs::write(&from, b"jpg").unwrap();
        std::fs::write(temp.path().join("blocker"), b"file").unwrap();
        let to = temp.path().join("blocker/pic.jpg");

        let err = fs_ops.rename(&from, &to).unwrap_err();
        assert!(err.to_string().contains("blocker"), "{err}");
        assert!(from.exists());
    }
}
