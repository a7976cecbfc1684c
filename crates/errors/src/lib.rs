#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for assetsweep
//!
//! Errors are organized by domain. Per-file failures during a run are never
//! propagated as `Err`; they are rendered through [`UserFacingError`] and
//! recorded in the run report instead.

use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod scan;
pub mod storage;

pub use config::ConfigError;
pub use scan::ScanError;
pub use storage::StorageError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("I/O error: {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
        path: Option<std::path::PathBuf>,
    },
}

impl Error {
    /// Create an Io error with an associated path
    pub fn io_with_path(err: &std::io::Error, path: impl Into<std::path::PathBuf>) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: Some(path.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Scan(ScanError::InvalidPattern {
            message: err.to_string(),
        })
    }
}

/// Result type alias for assetsweep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimal interface for rendering user-facing error information.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Whether retrying the same operation is likely to succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Stable error code for structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Config(err) => err.user_message(),
            Error::Storage(err) => err.user_message(),
            Error::Scan(err) => err.user_message(),
            Error::Io { message, .. } => Cow::Owned(message.clone()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(err) => err.user_hint(),
            Error::Storage(err) => err.user_hint(),
            Error::Scan(err) => err.user_hint(),
            Error::Io { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Error::Storage(err) => err.is_retryable(),
            Error::Io { .. } => true,
            _ => false,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Config(err) => err.user_code(),
            Error::Storage(err) => err.user_code(),
            Error::Scan(err) => err.user_code(),
            Error::Io { .. } => Some("error.io"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_kind_and_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(&io, "/notes/assets/a.png");
        match &err {
            Error::Io { kind, path, .. } => {
                assert_eq!(*kind, std::io::ErrorKind::NotFound);
                assert_eq!(
                    path.as_deref(),
                    Some(std::path::Path::new("/notes/assets/a.png"))
                );
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.user_code(), Some("error.io"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_nested_codes_are_forwarded() {
        let err: Error = ConfigError::EmptyTargetFolder.into();
        assert_eq!(err.user_code(), Some("config.empty_target_folder"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_every_variant_has_a_code() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let errors: Vec<Error> = vec![
            ConfigError::NoImageExtensions.into(),
            StorageError::from_io_with_path(&io, std::path::Path::new("/a.png")).into(),
            ScanError::unreadable(&io, std::path::Path::new("/a.md")).into(),
            io.into(),
        ];
        for err in errors {
            assert!(err.user_code().is_some(), "{err:?} has no code");
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_regex_error_becomes_invalid_pattern() {
        #[allow(clippy::invalid_regex)]
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: Error = regex_err.into();
        assert!(matches!(err, Error::Scan(ScanError::InvalidPattern { .. })));
    }
}
