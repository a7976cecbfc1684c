//! Report type definitions for reconciliation runs

use crate::Mode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filesystem step an outcome refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FsOperation {
    CreateDir,
    Move,
    Delete,
    RemoveDir,
}

impl std::fmt::Display for FsOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CreateDir => "create dir",
            Self::Move => "move",
            Self::Delete => "delete",
            Self::RemoveDir => "remove dir",
        };
        f.write_str(name)
    }
}

/// A single thing that happened (or would happen, in a dry run) during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// A missing parent directory was created for a relocated file
    CreatedDir { path: PathBuf, planned: bool },
    /// An attachment was moved to its referenced location
    Moved {
        from: PathBuf,
        to: PathBuf,
        planned: bool,
    },
    /// An unreferenced attachment was deleted
    Deleted { path: PathBuf, planned: bool },
    /// A directory left empty by a move or delete was removed
    RemovedEmptyDir { path: PathBuf },
    /// A referenced path had no attachment with the same file name
    Unmatched { path: PathBuf },
    /// A filesystem step failed; the run continued
    Failed {
        operation: FsOperation,
        path: PathBuf,
        message: String,
        code: Option<String>,
    },
}

impl ActionOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Report for one reconciliation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionReport {
    /// Mode that produced this report
    pub mode: Mode,
    /// Whether filesystem mutations were skipped
    pub dry_run: bool,
    /// Number of distinct image references found in documents
    pub declared_count: usize,
    /// Number of distinct image files found in attachment folders
    pub actual_count: usize,
    /// Size of `declared - actual` (references without a file in place)
    pub missing_count: usize,
    /// Size of `actual - declared` (files nobody references)
    pub orphan_count: usize,
    /// Unreferenced files, in walk order (filled in list mode)
    pub orphans: Vec<PathBuf>,
    /// Outcomes of mutating modes, in execution order
    pub outcomes: Vec<ActionOutcome>,
}

impl ActionReport {
    #[must_use]
    pub fn new(mode: Mode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            declared_count: 0,
            actual_count: 0,
            missing_count: 0,
            orphan_count: 0,
            orphans: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    /// Number of failed steps recorded
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Serialize the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
