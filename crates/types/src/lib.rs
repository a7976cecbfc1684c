#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for assetsweep
//!
//! This crate provides the types shared by the scanner, the reconciler and
//! the CLI: the reconciliation mode, output choices and run reports.

pub mod reports;

pub use reports::{ActionOutcome, ActionReport, FsOperation};

use assetsweep_errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reconciliation action selected once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Move attachment files to the location referenced by the documents
    UpdateLocation,
    /// List attachment files no document references
    ListUseless,
    /// Delete attachment files no document references
    DeleteUseless,
}

impl Mode {
    /// Name used on the command line and in reports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpdateLocation => "update_location",
            Self::ListUseless => "list_useless",
            Self::DeleteUseless => "delete_useless",
        }
    }

    /// Whether the mode mutates the filesystem
    #[must_use]
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::ListUseless)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::ListUseless
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "update_location" => Ok(Self::UpdateLocation),
            "list_useless" => Ok(Self::ListUseless),
            "delete_useless" => Ok(Self::DeleteUseless),
            other => Err(ConfigError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

// Implement clap::ValueEnum for Mode
impl clap::ValueEnum for Mode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::UpdateLocation, Self::ListUseless, Self::DeleteUseless]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::UpdateLocation => clap::builder::PossibleValue::new("update_location").help(
                "Move the image file to the image location indicated in the markdown document",
            ),
            Self::ListUseless => {
                clap::builder::PossibleValue::new("list_useless").help("List unreferenced image files")
            }
            Self::DeleteUseless => clap::builder::PossibleValue::new("delete_useless")
                .help("Delete unreferenced image files"),
        })
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Always,
    Auto,
    Never,
}

// Implement clap::ValueEnum for ColorChoice
impl clap::ValueEnum for ColorChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Always, Self::Auto, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Always => clap::builder::PossibleValue::new("always"),
            Self::Auto => clap::builder::PossibleValue::new("auto"),
            Self::Never => clap::builder::PossibleValue::new("never"),
        })
    }
}

impl Default for ColorChoice {
    fn default() -> Self {
        Self::Auto
    }
}
