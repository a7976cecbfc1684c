//! Filesystem operations used by the reconciliation actions

use assetsweep_errors::StorageError;
use std::path::Path;

/// Trait for the filesystem steps a reconciliation run may take
///
/// Query methods never fail: anything that cannot be determined is reported
/// as `false` and logged by the implementation.
pub trait FilesystemOperations {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory can be listed and has no entries
    fn is_empty_dir(&self, path: &Path) -> bool;

    /// Create directory and all parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), StorageError>;

    /// Rename a file, replacing `to` if the platform allows it
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails (missing source, cross-device, ...).
    fn rename(&self, from: &Path, to: &Path) -> Result<(), StorageError>;

    /// Remove a single file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), StorageError>;

    /// Remove an empty directory (never recursive)
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing, not empty, or protected.
    fn remove_dir(&self, path: &Path) -> Result<(), StorageError>;
}
