//! Error types for file operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during file operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The source of a copy or move does not exist.
    #[error("Source not found: {}", path.display())]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// No file name could be derived from the source path.
    #[error("Cannot determine a file name for {}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
    },

    /// The destination lies inside the source tree.
    #[error("Cannot place {} inside itself ({})", source_path.display(), target_path.display())]
    DestinationInsideSource {
        /// Source path.
        source_path: PathBuf,
        /// Resolved destination path.
        target_path: PathBuf,
    },

    /// The destination is a directory that contains the source.
    #[error("Cannot replace {} with its own descendant {}", target_path.display(), source_path.display())]
    DestinationContainsSource {
        /// Source path.
        source_path: PathBuf,
        /// Resolved destination path.
        target_path: PathBuf,
    },

    /// IO error during file operation.
    #[error("IO error at {}: {source}", path.display())]
    IoError {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Copy failed part way through.
    #[error("Copy error: {0}")]
    CopyError(#[from] fsops_copy::CopyError),

    /// Rename failed for a reason other than crossing devices.
    #[error("Failed to move {} to {}: {error}", source_path.display(), target_path.display())]
    MoveError {
        /// Source path.
        source_path: PathBuf,
        /// Target path.
        target_path: PathBuf,
        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The copy half of a cross-device move failed.
    #[error("Failed to move {} to {} across devices: {error}", source_path.display(), target_path.display())]
    MoveFallbackError {
        /// Source path.
        source_path: PathBuf,
        /// Target path.
        target_path: PathBuf,
        /// The copy error.
        #[source]
        error: fsops_copy::CopyError,
    },

    /// Listing failed.
    #[error("List error: {0}")]
    ListError(#[from] fsops_list::ListError),

    /// Unknown text encoding name.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// File content is not valid in the requested encoding.
    #[error("Failed to decode {}: {source}", path.display())]
    DecodeError {
        /// The file path.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },
}
