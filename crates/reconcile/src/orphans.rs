//! Deleting attachments no document references

use crate::{record_failure, remove_if_empty, ExecuteOptions};
use assetsweep_platform::FilesystemOperations;
use assetsweep_types::{ActionOutcome, FsOperation};
use std::path::PathBuf;
use tracing::info;

/// Delete every orphan, then its parent directory if that is left empty
pub(crate) fn delete_orphans(
    fs: &dyn FilesystemOperations,
    orphans: &[PathBuf],
    options: &ExecuteOptions,
    outcomes: &mut Vec<ActionOutcome>,
) {
    for path in orphans {
        if options.dry_run {
            outcomes.push(ActionOutcome::Deleted {
                path: path.clone(),
                planned: true,
            });
            continue;
        }

        if let Err(e) = fs.remove_file(path) {
            record_failure(outcomes, FsOperation::Delete, path, &e);
            continue;
        }
        info!(path = %path.display(), "deleted unreferenced attachment");
        outcomes.push(ActionOutcome::Deleted {
            path: path.clone(),
            planned: false,
        });

        if let Some(dir) = path.parent() {
            remove_if_empty(fs, dir, outcomes);
        }
    }
}
