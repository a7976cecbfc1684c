//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("target folder name must not be empty")]
    EmptyTargetFolder,

    #[error("invalid target folder name: {name}")]
    InvalidTargetFolder { name: String },

    #[error("unsupported mode: {mode}")]
    UnsupportedMode { mode: String },

    #[error("no image extensions configured")]
    NoImageExtensions,

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::EmptyTargetFolder | Self::InvalidTargetFolder { .. } => Some(
                "Pass a bare directory name such as `assets` to --target-folder, without path separators.",
            ),
            Self::UnsupportedMode { .. } => {
                Some("Use one of: update_location, list_useless, delete_useless.")
            }
            Self::NoImageExtensions => Some("Configure at least one image extension."),
            Self::InvalidValue { .. } => Some("Fix the value and retry the command."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::EmptyTargetFolder => "config.empty_target_folder",
            Self::InvalidTargetFolder { .. } => "config.invalid_target_folder",
            Self::UnsupportedMode { .. } => "config.not_implemented",
            Self::NoImageExtensions => "config.no_image_extensions",
            Self::InvalidValue { .. } => "config.invalid_value",
        };
        Some(code)
    }
}
