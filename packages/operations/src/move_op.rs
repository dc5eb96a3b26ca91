//! Move operation with cross-device fallback.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fsops_copy::is_within;
use fsops_path::{PathSpec, resolve_destination};
use fsops_probe::classify;

use crate::error::OperationError;
use crate::source_basename;

/// Move a file or directory tree.
///
/// The destination is resolved exactly like [`copy`](crate::copy). Whatever
/// already exists at the final destination is removed first, then the source
/// is renamed into place as a whole. If the rename fails because source and
/// destination are on different devices, the source is copied and then
/// removed; that fallback is not atomic and an interruption may leave both
/// populated.
///
/// Moving a node onto itself succeeds without touching anything.
///
/// # Arguments
///
/// * `source` - Source file or directory path
/// * `destination` - Destination file path or directory
///
/// # Returns
///
/// The final path of the moved node.
///
/// # Errors
///
/// * If the source does not exist (nothing is touched)
/// * If the destination lies inside the source tree
/// * If the destination is a directory containing the source
/// * If the rename fails for any reason other than crossing devices
/// * If the cross-device copy or the removal of the source fails
pub fn move_path(source: &str, destination: &str) -> Result<PathBuf, OperationError> {
    move_path_with(source, destination, |from, to| fs::rename(from, to))
}

/// [`move_path`] with the rename step supplied by the caller.
fn move_path_with<R>(source: &str, destination: &str, rename: R) -> Result<PathBuf, OperationError>
where
    R: Fn(&Path, &Path) -> io::Result<()>,
{
    let source = PathSpec::new(source);

    log::debug!("Move requested: {source} -> {destination}");

    if !classify(source.as_path()).exists() {
        log::debug!("Source does not exist");
        return Err(OperationError::SourceNotFound {
            path: source.into_path_buf(),
        });
    }

    let resolved = resolve_destination(source_basename(&source)?, destination);
    let source = source.into_path_buf();
    let target = resolved.final_path;

    if is_within(&target, &source) {
        if is_within(&source, &target) {
            log::debug!("Source and destination are the same, nothing to move");
            return Ok(target);
        }

        return Err(OperationError::DestinationInsideSource {
            source_path: source,
            target_path: target,
        });
    }

    if is_within(&source, &target) {
        return Err(OperationError::DestinationContainsSource {
            source_path: source,
            target_path: target,
        });
    }

    fsops_copy::ensure_directory(&resolved.parent).map_err(|e| OperationError::IoError {
        path: resolved.parent.clone(),
        source: e,
    })?;

    // Overwrite semantics: clear whatever is already there
    fsops_copy::remove_recursive(&target).map_err(|e| OperationError::IoError {
        path: target.clone(),
        source: e,
    })?;

    match rename(&source, &target) {
        Ok(()) => {
            log::debug!("Renamed {} -> {}", source.display(), target.display());
        }
        Err(e) if is_cross_device(&e) => {
            log::warn!(
                "Rename of {} crosses devices, falling back to copy and delete",
                source.display()
            );
            copy_then_delete(&source, &target)?;
        }
        Err(e) => {
            return Err(OperationError::MoveError {
                source_path: source,
                target_path: target,
                error: e,
            });
        }
    }

    Ok(target)
}

/// Copy `source` to `target`, then remove `source`.
fn copy_then_delete(source: &Path, target: &Path) -> Result<(), OperationError> {
    let stats = fsops_copy::copy_tree(source, target).map_err(|e| {
        OperationError::MoveFallbackError {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
            error: e,
        }
    })?;

    fsops_copy::remove_recursive(source).map_err(|e| OperationError::IoError {
        path: source.to_path_buf(),
        source: e,
    })?;

    log::debug!(
        "Moved {} -> {} by copy ({} files)",
        source.display(),
        target.display(),
        stats.files_copied
    );

    Ok(())
}

/// Whether a rename failed only because it would cross devices.
fn is_cross_device(error: &io::Error) -> bool {
    #[cfg(unix)]
    let exdev = error.raw_os_error() == Some(libc::EXDEV);
    #[cfg(not(unix))]
    let exdev = false;

    exdev || error.kind() == io::ErrorKind::CrossesDevices
}
