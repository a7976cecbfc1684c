//! Moving attachments to the location documents reference them at

use crate::{record_failure, remove_if_empty, ExecuteOptions};
use assetsweep_platform::FilesystemOperations;
use assetsweep_types::{ActionOutcome, FsOperation};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Move, for each missing reference, the first attachment with the same file
/// name into place
///
/// Candidates are searched in `actual` order and the first match wins, even
/// if an earlier reference already moved it. A failed mkdir does not prevent
/// the rename attempt.
pub(crate) fn relocate(
    fs: &dyn FilesystemOperations,
    missing: &[PathBuf],
    actual: &[PathBuf],
    options: &ExecuteOptions,
    outcomes: &mut Vec<ActionOutcome>,
) {
    for target in missing {
        match first_with_same_name(actual, target) {
            Some(source) => move_into_place(fs, source, target, options, outcomes),
            None => {
                debug!(path = %target.display(), "no attachment with a matching name");
                outcomes.push(ActionOutcome::Unmatched {
                    path: target.clone(),
                });
            }
        }
    }
}

fn first_with_same_name<'a>(actual: &'a [PathBuf], target: &Path) -> Option<&'a PathBuf> {
    let name = target.file_name()?;
    actual.iter().find(|p| p.file_name() == Some(name))
}

fn move_into_place(
    fs: &dyn FilesystemOperations,
    source: &Path,
    target: &Path,
    options: &ExecuteOptions,
    outcomes: &mut Vec<ActionOutcome>,
) {
    if let Some(dir) = target.parent() {
        if !fs.exists(dir) {
            if options.dry_run {
                outcomes.push(ActionOutcome::CreatedDir {
                    path: dir.to_path_buf(),
                    planned: true,
                });
            } else {
                match fs.create_dir_all(dir) {
                    Ok(()) => {
                        info!(path = %dir.display(), "created directory");
                        outcomes.push(ActionOutcome::CreatedDir {
                            path: dir.to_path_buf(),
                            planned: false,
                        });
                    }
                    Err(e) => record_failure(outcomes, FsOperation::CreateDir, dir, &e),
                }
            }
        }
    }

    if options.dry_run {
        outcomes.push(ActionOutcome::Moved {
            from: source.to_path_buf(),
            to: target.to_path_buf(),
            planned: true,
        });
        return;
    }

    if let Err(e) = fs.rename(source, target) {
        record_failure(outcomes, FsOperation::Move, source, &e);
        return;
    }
    info!(from = %source.display(), to = %target.display(), "moved attachment");
    outcomes.push(ActionOutcome::Moved {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        planned: false,
    });

    if let Some(dir) = source.parent() {
        remove_if_empty(fs, dir, outcomes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetsweep_errors::StorageError;
    use assetsweep_platform::LocalFilesystem;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }

    #[test]
    fn test_moves_into_new_directory_and_removes_empty_source() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let source = root.join("assets/pic.jpg");
        let target = root.join("img/pic.jpg");
        touch(&source);

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[target.clone()],
            &[source.clone()],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert!(target.exists());
        assert!(!source.exists());
        assert!(!root.join("assets").exists());
        assert_eq!(
            outcomes,
            vec![
                ActionOutcome::CreatedDir {
                    path: root.join("img"),
                    planned: false
                },
                ActionOutcome::Moved {
                    from: source,
                    to: target,
                    planned: false
                },
                ActionOutcome::RemovedEmptyDir {
                    path: root.join("assets")
                },
            ]
        );
    }

    #[test]
    fn test_keeps_non_empty_source_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("assets/pic.jpg"));
        touch(&root.join("assets/other.png"));
        fs::create_dir(root.join("img")).unwrap();

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[root.join("img/pic.jpg")],
            &[root.join("assets/pic.jpg"), root.join("assets/other.png")],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert!(root.join("img/pic.jpg").exists());
        assert!(root.join("assets/other.png").exists());
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], ActionOutcome::Moved { .. }));
    }

    #[test]
    fn test_first_match_wins() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let first = root.join("a/assets/pic.jpg");
        let second = root.join("b/assets/pic.jpg");
        touch(&first);
        touch(&second);

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[root.join("img/pic.jpg")],
            &[first.clone(), second.clone()],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert!(!first.exists());
        assert!(second.exists());
    }

    #[test]
    fn test_unmatched_reference_is_recorded() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("img/ghost.png");

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[target.clone()],
            &[temp.path().join("assets/pic.jpg")],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert_eq!(outcomes, vec![ActionOutcome::Unmatched { path: target }]);
        assert!(!temp.path().join("img").exists());
    }

    #[test]
    fn test_failed_rename_is_recorded_and_run_continues() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let present = root.join("assets/b.png");
        touch(&present);

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[root.join("img/a.png"), root.join("img/b.png")],
            &[root.join("assets/a.png"), present],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert!(outcomes.iter().any(|o| matches!(
            o,
            ActionOutcome::Failed {
                operation: FsOperation::Move,
                ..
            }
        )));
        assert!(root.join("img/b.png").exists());
    }

    #[test]
    fn test_failed_mkdir_still_attempts_move_and_continues() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let source = root.join("assets/pic.jpg");
        touch(&source);
        fs::write(root.join("blocker"), b"not a directory").unwrap();

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[root.join("blocker/img/pic.jpg"), root.join("ok/pic2.jpg")],
            &[source.clone()],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert!(source.exists());
        assert!(matches!(
            &outcomes[..],
            [
                ActionOutcome::Failed {
                    operation: FsOperation::CreateDir,
                    ..
                },
                ActionOutcome::Failed {
                    operation: FsOperation::Move,
                    ..
                },
                ActionOutcome::Unmatched { .. },
            ]
        ));
        assert_eq!(
            outcomes[2],
            ActionOutcome::Unmatched {
                path: root.join("ok/pic2.jpg")
            }
        );
    }

    /// Local disk, except that removing directories always fails
    struct NoRemoveDir(LocalFilesystem);

    impl FilesystemOperations for NoRemoveDir {
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }

        fn is_empty_dir(&self, path: &Path) -> bool {
            self.0.is_empty_dir(path)
        }

        fn create_dir_all(&self, path: &Path) -> Result<(), StorageError> {
            self.0.create_dir_all(path)
        }

        fn rename(&self, from: &Path, to: &Path) -> Result<(), StorageError> {
            self.0.rename(from, to)
        }

        fn remove_file(&self, path: &Path) -> Result<(), StorageError> {
            self.0.remove_file(path)
        }

        fn remove_dir(&self, path: &Path) -> Result<(), StorageError> {
            Err(StorageError::PermissionDenied {
                path: path.display().to_string(),
            })
        }
    }

    #[test]
    fn test_failed_cleanup_is_recorded_after_move() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let source = root.join("assets/pic.jpg");
        let target = root.join("img/pic.jpg");
        touch(&source);

        let mut outcomes = Vec::new();
        relocate(
            &NoRemoveDir(LocalFilesystem::new()),
            &[target.clone()],
            &[source],
            &ExecuteOptions::default(),
            &mut outcomes,
        );

        assert!(target.exists());
        assert!(root.join("assets").exists());
        match outcomes.last() {
            Some(ActionOutcome::Failed {
                operation: FsOperation::RemoveDir,
                path,
                code,
                ..
            }) => {
                assert_eq!(path, &root.join("assets"));
                assert_eq!(code.as_deref(), Some("storage.permission_denied"));
            }
            other => panic!("unexpected last outcome: {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let source = root.join("assets/pic.jpg");
        touch(&source);

        let mut outcomes = Vec::new();
        relocate(
            &LocalFilesystem::new(),
            &[root.join("img/pic.jpg")],
            &[source.clone()],
            &ExecuteOptions { dry_run: true },
            &mut outcomes,
        );

        assert!(source.exists());
        assert!(!root.join("img").exists());
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(
            outcomes[1],
            ActionOutcome::Moved { planned: true, .. }
        ));
    }
}
