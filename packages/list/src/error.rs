//! Error types for listing operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing a directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// The listed directory itself could not be enumerated.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An entry below the root could not be probed during a recursive walk.
    #[error("Failed to probe {} while listing: {message}", path.display())]
    Entry {
        /// Path of the entry that failed.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The glob pattern could not be compiled.
    #[error("Invalid pattern {pattern:?}: {source}")]
    Pattern {
        /// The pattern as supplied.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },
}
