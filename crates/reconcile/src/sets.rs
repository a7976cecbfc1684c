//! Ordered path sets and set differences

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Insertion-ordered set of paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    order: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl PathSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `path` unless already present; returns whether it was new
    pub fn push(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.order.push(path);
        true
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.order.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.order
    }
}

impl FromIterator<PathBuf> for PathSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.push(path);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drop later duplicates, keeping first occurrences in order
#[must_use]
pub fn dedup(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let before = paths.len();
    let out = paths.into_iter().collect::<PathSet>().into_vec();
    debug!(input = before, output = out.len(), "deduplicated paths");
    out
}

/// Elements of `probe` not present in `base`, in `probe` order
#[must_use]
pub fn difference(base: &[PathBuf], probe: &[PathBuf]) -> Vec<PathBuf> {
    let lookup: HashSet<&Path> = base.iter().map(PathBuf::as_path).collect();
    let out: Vec<PathBuf> = probe
        .iter()
        .filter(|p| !lookup.contains(p.as_path()))
        .cloned()
        .collect();
    debug!(
        base = base.len(),
        probe = probe.len(),
        difference = out.len(),
        "computed difference"
    );
    out
}
