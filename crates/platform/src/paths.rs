//! Lexical path helpers
//!
//! Paths are cleaned purely lexically: `.` segments are dropped and `..`
//! removes the preceding normal component. Symlinks are never resolved, so
//! two spellings of the same file only compare equal after cleaning.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically clean a path
///
/// `..` at the root stays at the root; leading `..` of a relative path are
/// kept. An empty result becomes `.`.
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Join `rel` under `base` and clean the result
///
/// A leading root in `rel` does not replace `base`: `/img/a.png` under
/// `/notes` becomes `/notes/img/a.png`.
#[must_use]
pub fn join_clean(base: &Path, rel: &Path) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in rel.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    clean(&joined)
}

/// Make `path` absolute against the current directory, then clean it
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolute_clean(path: &Path) -> io::Result<PathBuf> {
    Ok(clean(&std::path::absolute(path)?))
}
