#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for assetsweep
//!
//! There is no configuration file: a [`Config`] starts from hard-coded
//! defaults and the CLI applies its flags on top, then calls
//! [`Config::validate`] before anything touches the filesystem.

pub mod constants;

use assetsweep_errors::{ConfigError, Error};
use assetsweep_types::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use constants::{DEFAULT_TARGET_FOLDER, DOCUMENT_EXTENSION, IMAGE_EXTENSIONS};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding the documents
    pub target_root: PathBuf,

    /// Base name of attachment folders anywhere under the root
    #[serde(default = "default_target_folder")]
    pub target_folder: String,

    #[serde(default)]
    pub mode: Mode,

    /// Report mutations without performing them
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub scan: ScanConfig,
}

/// Document scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
    #[serde(default = "default_document_extension")]
    pub document_extension: String,
    /// Match links, extensions and the external prefix case-insensitively
    #[serde(default)]
    pub ignore_case: bool,
    /// Also recognise `![[path.png]]` embeds
    #[serde(default)]
    pub wiki_links: bool,
    /// Percent-decode links before resolving them
    #[serde(default)]
    pub decode_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            image_extensions: default_image_extensions(),
            document_extension: default_document_extension(),
            ignore_case: false,
            wiki_links: false,
            decode_links: false,
        }
    }
}

// Default value functions for serde
fn default_target_folder() -> String {
    DEFAULT_TARGET_FOLDER.to_string()
}

fn default_image_extensions() -> Vec<String> {
    IMAGE_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_document_extension() -> String {
    DOCUMENT_EXTENSION.to_string()
}

impl Config {
    /// Configuration for `target_root` with every other field at its default
    pub fn new(target_root: impl Into<PathBuf>) -> Self {
        Self {
            target_root: target_root.into(),
            target_folder: default_target_folder(),
            mode: Mode::default(),
            dry_run: false,
            scan: ScanConfig::default(),
        }
    }

    /// Check the invariants the scanner and executor rely on
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the target folder is empty, `.`/`..`, or contains a path separator
    /// - no image extensions are configured, or one is not a plain suffix
    /// - the document extension is empty
    pub fn validate(&self) -> Result<(), Error> {
        validate_target_folder(&self.target_folder)?;
        self.scan.validate()?;
        Ok(())
    }

    /// Root directory to walk
    #[must_use]
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }
}

impl ScanConfig {
    /// Check the recognition rules
    ///
    /// # Errors
    ///
    /// Returns an error if the extension lists are unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_extensions.is_empty() {
            return Err(ConfigError::NoImageExtensions);
        }
        for ext in &self.image_extensions {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::InvalidValue {
                    field: "image_extensions".to_string(),
                    value: ext.clone(),
                });
            }
        }
        if self.document_extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "document_extension".to_string(),
                value: self.document_extension.clone(),
            });
        }
        Ok(())
    }
}

fn validate_target_folder(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyTargetFolder);
    }
    if name == "." || name == ".." || name.chars().any(std::path::is_separator) {
        tracing::debug!(target_folder = name, "rejecting target folder");
        return Err(ConfigError::InvalidTargetFolder {
            name: name.to_string(),
        });
    }
    Ok(())
}
