#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Document and attachment-folder scanning
//!
//! A scan walks the target root once and produces two path lists: the image
//! paths declared by Markdown documents and the image files that actually sit
//! in attachment folders. Both lists may contain duplicates; deduplication is
//! the reconciler's job.

mod links;
mod walker;

pub use links::{extract_links, LinkMatcher};
pub use walker::{scan_tree, ScanResult, Scanner};
