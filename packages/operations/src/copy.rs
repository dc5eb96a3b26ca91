//! File and directory copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use fsops_path::{PathSpec, resolve_destination};
use fsops_probe::classify;

use crate::error::OperationError;
use crate::source_basename;

/// Copy a file or directory tree.
///
/// A destination with a file extension is used verbatim; any other
/// destination is treated as a directory and the source's name is appended.
/// The destination's parent is created if missing. Existing files at the
/// destination are replaced, existing directories are merged into.
///
/// # Arguments
///
/// * `source` - Source file or directory path
/// * `destination` - Destination file path or directory
///
/// # Returns
///
/// The final path of the copy.
///
/// # Errors
///
/// * If the source does not exist (nothing is touched)
/// * If the destination lies inside the source tree
/// * If the destination is a directory containing the source
/// * If the copy operation fails; partial results are left in place
pub fn copy(source: &str, destination: &str) -> Result<PathBuf, OperationError> {
    let source = PathSpec::new(source);

    log::debug!("Copy requested: {source} -> {destination}");

    let kind = classify(source.as_path());
    if !kind.exists() {
        log::debug!("Source does not exist");
        return Err(OperationError::SourceNotFound {
            path: source.into_path_buf(),
        });
    }

    let resolved = resolve_destination(source_basename(&source)?, destination);

    if fsops_copy::is_within(&resolved.final_path, source.as_path()) {
        return Err(OperationError::DestinationInsideSource {
            source_path: source.into_path_buf(),
            target_path: resolved.final_path,
        });
    }

    if fsops_copy::is_within(source.as_path(), &resolved.final_path) {
        return Err(OperationError::DestinationContainsSource {
            source_path: source.into_path_buf(),
            target_path: resolved.final_path,
        });
    }

    fsops_copy::ensure_directory(&resolved.parent).map_err(|e| OperationError::IoError {
        path: resolved.parent.clone(),
        source: e,
    })?;

    let stats = fsops_copy::copy_tree(source.as_path(), &resolved.final_path)?;

    log::debug!(
        "Copied {kind} {source} -> {} ({} files)",
        resolved.final_path.display(),
        stats.files_copied
    );

    Ok(resolved.final_path)
}
