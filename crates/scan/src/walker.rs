//! Tree walk collecting declared and actual attachment paths

use crate::links::{extract_links, LinkMatcher};
use assetsweep_config::{Config, ScanConfig};
use assetsweep_errors::{Error, ScanError};
use assetsweep_platform::absolute_clean;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Raw output of one walk; both lists keep walk order and duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Image paths referenced by documents
    pub declared: Vec<PathBuf>,
    /// Image files found directly inside attachment folders
    pub actual: Vec<PathBuf>,
    /// Number of documents that were opened and read for links
    pub documents_scanned: usize,
}

/// Walks a tree with a compiled [`LinkMatcher`]
#[derive(Debug, Clone)]
pub struct Scanner {
    matcher: LinkMatcher,
    document_extension: String,
    ignore_case: bool,
}

impl Scanner {
    /// Build a scanner for the given recognition rules
    ///
    /// # Errors
    ///
    /// Returns an error if the link patterns cannot be compiled.
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        Ok(Self {
            matcher: LinkMatcher::new(config)?,
            document_extension: config.document_extension.clone(),
            ignore_case: config.ignore_case,
        })
    }

    /// Walk `root` depth-first, siblings in file-name order
    ///
    /// Inside a directory named `target_folder`, non-directory entries with an
    /// image extension are collected as actual files; every other directory is
    /// descended into and every document outside attachment folders is
    /// scanned for links. Unlistable directories count as empty. Symlinked
    /// directories are not followed.
    #[must_use]
    pub fn scan(&self, root: &Path, target_folder: &str) -> ScanResult {
        let folder = OsStr::new(target_folder);
        let mut result = ScanResult::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .min_depth(1);

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(error = %e, "skipping unlistable entry");
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().is_dir();
            let in_attachment_folder = path
                .parent()
                .and_then(Path::file_name)
                .is_some_and(|name| name == folder);

            if in_attachment_folder && !is_dir {
                let name = entry.file_name().to_string_lossy();
                if self.matcher.is_image_name(&name) {
                    result.actual.push(path.to_path_buf());
                }
            } else if !is_dir && self.is_document(&entry.file_name().to_string_lossy()) {
                if extract_links(&self.matcher, path, &mut result.declared).is_some() {
                    result.documents_scanned += 1;
                }
            }
        }

        debug!(
            root = %root.display(),
            documents = result.documents_scanned,
            declared = result.declared.len(),
            actual = result.actual.len(),
            "scan finished"
        );
        result
    }

    fn is_document(&self, name: &str) -> bool {
        if self.ignore_case {
            name.to_lowercase()
                .ends_with(&self.document_extension.to_lowercase())
        } else {
            name.ends_with(&self.document_extension)
        }
    }
}

/// Scan the configured root
///
/// The root is made absolute and cleaned first so every collected path is
/// absolute.
///
/// # Errors
///
/// Returns an error if the link patterns are invalid or the current directory
/// cannot be determined for a relative root.
pub fn scan_tree(config: &Config) -> Result<ScanResult, Error> {
    let root = absolute_clean(config.target_root())
        .map_err(|e| Error::io_with_path(&e, config.target_root()))?;
    let scanner = Scanner::new(&config.scan)?;
    Ok(scanner.scan(&root, &config.target_folder))
}
