#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Reconciliation of declared image references against attachment folders
//!
//! A run is scan, then [`reconcile`], then [`execute`]. The executor never
//! returns an error for a failed filesystem step: every step is attempted,
//! logged, and recorded in the [`ActionReport`].

mod orphans;
mod relocate;
mod sets;

pub use sets::{dedup, difference, PathSet};

use assetsweep_config::Config;
use assetsweep_errors::{Error, StorageError, UserFacingError};
use assetsweep_platform::{FilesystemOperations, LocalFilesystem};
use assetsweep_scan::{scan_tree, ScanResult};
use assetsweep_types::{ActionOutcome, ActionReport, FsOperation, Mode};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Both sides of a run and their differences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Deduplicated paths referenced by documents
    pub declared: Vec<PathBuf>,
    /// Deduplicated image files found in attachment folders
    pub actual: Vec<PathBuf>,
    /// `actual - declared`: files no document references
    pub orphans: Vec<PathBuf>,
    /// `declared - actual`: references with no file at that location
    pub missing: Vec<PathBuf>,
}

/// Deduplicate both sides of a scan and compute the two differences
#[must_use]
pub fn reconcile(scan: ScanResult) -> Reconciliation {
    let declared = dedup(scan.declared);
    let actual = dedup(scan.actual);
    let orphans = difference(&declared, &actual);
    let missing = difference(&actual, &declared);
    Reconciliation {
        declared,
        actual,
        orphans,
        missing,
    }
}

/// Options for the mutating modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Record planned mutations without touching the filesystem
    pub dry_run: bool,
}

impl ExecuteOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            dry_run: config.dry_run,
        }
    }
}

/// Run `mode` against the local filesystem
#[must_use]
pub fn execute(rec: &Reconciliation, mode: Mode, options: &ExecuteOptions) -> ActionReport {
    execute_with(&LocalFilesystem::new(), rec, mode, options)
}

/// Run `mode` through the given filesystem implementation
pub fn execute_with(
    fs: &dyn FilesystemOperations,
    rec: &Reconciliation,
    mode: Mode,
    options: &ExecuteOptions,
) -> ActionReport {
    let mut report = ActionReport::new(mode, options.dry_run);
    report.declared_count = rec.declared.len();
    report.actual_count = rec.actual.len();
    report.missing_count = rec.missing.len();
    report.orphan_count = rec.orphans.len();

    debug!(
        mode = %mode,
        dry_run = options.dry_run,
        declared = report.declared_count,
        actual = report.actual_count,
        missing = report.missing_count,
        orphans = report.orphan_count,
        "executing reconciliation"
    );

    match mode {
        Mode::UpdateLocation => {
            relocate::relocate(fs, &rec.missing, &rec.actual, options, &mut report.outcomes);
        }
        Mode::ListUseless => report.orphans.clone_from(&rec.orphans),
        Mode::DeleteUseless => {
            orphans::delete_orphans(fs, &rec.orphans, options, &mut report.outcomes);
        }
    }

    if report.failure_count() > 0 {
        warn!(
            failures = report.failure_count(),
            "some filesystem steps failed"
        );
    }
    report
}

/// Scan the configured root, reconcile, and execute the configured mode
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the scan cannot
/// start. Failures of individual filesystem steps are recorded in the
/// report instead.
pub fn run(config: &Config) -> Result<ActionReport, Error> {
    config.validate()?;
    let scan = scan_tree(config)?;
    let rec = reconcile(scan);
    Ok(execute(&rec, config.mode, &ExecuteOptions::from_config(config)))
}

/// Record a failed step and log it
pub(crate) fn record_failure(
    outcomes: &mut Vec<ActionOutcome>,
    operation: FsOperation,
    path: &Path,
    err: &StorageError,
) {
    warn!(operation = %operation, path = %path.display(), error = %err, "step failed");
    outcomes.push(ActionOutcome::Failed {
        operation,
        path: path.to_path_buf(),
        message: err.user_message().into_owned(),
        code: err.user_code().map(str::to_string),
    });
}

/// Remove `dir` if it still exists and has no entries left (one level only)
pub(crate) fn remove_if_empty(
    fs: &dyn FilesystemOperations,
    dir: &Path,
    outcomes: &mut Vec<ActionOutcome>,
) {
    if !fs.exists(dir) || !fs.is_empty_dir(dir) {
        return;
    }
    match fs.remove_dir(dir) {
        Ok(()) => {
            info!(path = %dir.display(), "removed empty directory");
            outcomes.push(ActionOutcome::RemovedEmptyDir {
                path: dir.to_path_buf(),
            });
        }
        Err(e) => record_failure(outcomes, FsOperation::RemoveDir, dir, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_reconcile_dedups_and_diffs() {
        let scan = ScanResult {
            declared: paths(&["/n/assets/pic.jpg", "/n/img/b.png", "/n/assets/pic.jpg"]),
            actual: paths(&["/n/assets/orphan.png", "/n/assets/pic.jpg"]),
            documents_scanned: 2,
        };
        let rec = reconcile(scan);
        assert_eq!(rec.declared, paths(&["/n/assets/pic.jpg", "/n/img/b.png"]));
        assert_eq!(rec.orphans, paths(&["/n/assets/orphan.png"]));
        assert_eq!(rec.missing, paths(&["/n/img/b.png"]));
    }

    #[test]
    fn test_list_mode_is_read_only() {
        let rec = Reconciliation {
            declared: paths(&["/n/assets/pic.jpg"]),
            actual: paths(&["/n/assets/pic.jpg", "/definitely/not/here/orphan.png"]),
            orphans: paths(&["/definitely/not/here/orphan.png"]),
            missing: Vec::new(),
        };
        let report = execute(&rec, Mode::ListUseless, &ExecuteOptions::default());
        assert_eq!(report.orphans, rec.orphans);
        assert_eq!(report.declared_count, 1);
        assert_eq!(report.actual_count, 2);
        assert!(report.outcomes.is_empty());
    }
}
