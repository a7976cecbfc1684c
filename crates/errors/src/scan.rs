//! Document scanning error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("invalid link pattern: {message}")]
    InvalidPattern { message: String },

    #[error("cannot read document {path}: {message}")]
    DocumentUnreadable { path: String, message: String },
}

impl ScanError {
    /// Build a `DocumentUnreadable` error for the given document
    #[must_use]
    pub fn unreadable(err: &std::io::Error, path: &std::path::Path) -> Self {
        Self::DocumentUnreadable {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl UserFacingError for ScanError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => {
                Some("Image extensions must be plain file suffixes such as `png`.")
            }
            Self::DocumentUnreadable { .. } => Some("Check the document's permissions."),
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::DocumentUnreadable { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidPattern { .. } => "scan.invalid_pattern",
            Self::DocumentUnreadable { .. } => "scan.document_unreadable",
        };
        Some(code)
    }
}
