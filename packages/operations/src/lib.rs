//! File operations for fsops.
//!
//! This crate is the string-path facade over the fsops building blocks:
//!
//! * Copy and move with file-vs-directory destination resolution
//! * Cross-device move fallback (copy, then delete)
//! * Forced recursive removal and idempotent directory creation
//! * Text and binary file reads and writes
//! * Existence/type probes and directory listing
//!
//! Every path argument is separator-normalized on entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use fsops_operations::{copy, move_path, path_exists};
//!
//! // "dest" has no extension, so the file lands at dest/report.pdf
//! let copied = copy("out/report.pdf", "dest")?;
//!
//! // "archive/old.pdf" has an extension, so it is used verbatim
//! let moved = move_path("out/report.pdf", "archive/old.pdf")?;
//! assert!(!path_exists("out/report.pdf"));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod contents;
mod copy;
mod error;
mod move_op;
mod query;
mod tree;

pub use contents::{Encoding, FileContents, read_file_contents, write_file_contents};
pub use copy::copy;
pub use error::OperationError;
pub use move_op::move_path;
pub use query::{is_directory, is_file, list_entries, node_kind, path_exists};
pub use tree::{ensure_directory, remove_recursive};

pub use fsops_list::ListOptions;
pub use fsops_path::{
    DestinationResolution, PathSpec, normalize_separators, resolve_destination,
    working_directory,
};
pub use fsops_probe::NodeKind;

use std::ffi::OsString;
use std::path;

use path_clean::PathClean;

/// File name of the node at `source`, used to resolve directory destinations.
///
/// Paths without a final name component (`.`, `..`, `dir/..`) are resolved
/// against the working directory first.
fn source_basename(source: &PathSpec) -> Result<OsString, OperationError> {
    if let Some(name) = source.as_path().file_name() {
        return Ok(name.to_os_string());
    }

    path::absolute(source.as_path())
        .ok()
        .map(|abs| abs.clean())
        .and_then(|abs| abs.file_name().map(ToOwned::to_owned))
        .ok_or_else(|| OperationError::InvalidPath {
            path: source.as_path().to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_basename() {
        assert_eq!(
            source_basename(&PathSpec::new("a/b/file.txt")).unwrap(),
            "file.txt"
        );
        assert_eq!(source_basename(&PathSpec::new(r"a\tree\")).unwrap(), "tree");

        let cwd = std::env::current_dir().unwrap();
        if let Some(name) = cwd.file_name() {
            assert_eq!(source_basename(&PathSpec::new(".")).unwrap(), name);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_source_basename_of_root_fails() {
        let result = source_basename(&PathSpec::new("/"));

        assert!(matches!(result, Err(OperationError::InvalidPath { .. })));
    }
}
