//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur during copy operations.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Failed to read source directory.
    #[error("Failed to read directory {}: {io_error}", path.display())]
    ReadDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to create target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopyError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to remove a node that was in the way of the copy.
    #[error("Failed to remove {}: {io_error}", path.display())]
    RemoveError {
        /// The path being replaced.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// A source node disappeared while the copy was running.
    #[error("Source vanished during copy: {}", path.display())]
    SourceVanished {
        /// The missing path.
        path: PathBuf,
    },

    /// The target lies inside the source tree (or is the source itself).
    #[error("Cannot copy {} into itself ({})", source_path.display(), target_path.display())]
    TargetInsideSource {
        /// Source path.
        source_path: PathBuf,
        /// Target path.
        target_path: PathBuf,
    },

    /// The target is an ancestor of the source.
    #[error("Cannot copy {} over its own ancestor {}", source_path.display(), target_path.display())]
    TargetContainsSource {
        /// Source path.
        source_path: PathBuf,
        /// Target path.
        target_path: PathBuf,
    },

    /// A file copy would land on an existing directory.
    #[error("Cannot overwrite directory {} with a file", path.display())]
    TargetIsDirectory {
        /// The directory in the way.
        path: PathBuf,
    },
}
