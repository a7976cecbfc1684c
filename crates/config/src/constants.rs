//! Fixed recognition rules for documents and attachments
//!
//! These values are not exposed on the command line; they describe the file
//! formats the tool understands.

/// Default base name of attachment folders
pub const DEFAULT_TARGET_FOLDER: &str = "assets";

/// Extension identifying text documents, including the dot
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Extensions identifying image attachments, without the dot
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "bmp", "gif"];

/// Prefix marking a link as external (covers `https` as well)
pub const EXTERNAL_LINK_PREFIX: &str = "http";
