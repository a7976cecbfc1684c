#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Filesystem abstraction for assetsweep.
//!
//! This crate provides:
//! - the [`FilesystemOperations`] seam the action executor mutates through
//! - [`LocalFilesystem`], the blocking `std::fs` implementation
//! - lexical path helpers shared by the scanner and the executor

pub mod filesystem;
pub mod fs;
pub mod paths;

pub use filesystem::FilesystemOperations;
pub use fs::LocalFilesystem;
pub use paths::{absolute_clean, clean, join_clean};
