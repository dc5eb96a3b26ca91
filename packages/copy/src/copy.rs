//! Parallel recursive copy implementation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{self, Path, PathBuf};

use fsops_probe::{NodeKind, classify, is_directory};
use path_clean::PathClean;
use rayon::prelude::*;

use crate::error::CopyError;
use crate::remove::{ensure_directory, remove_recursive};

/// Summary of a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied.
    pub files_copied: u64,
    /// Number of directories created or reused.
    pub directories: u64,
}

/// A directory pair waiting to be copied.
#[derive(Debug, Clone)]
struct DirectoryPair {
    source: PathBuf,
    target: PathBuf,
}

/// Outcome of copying one directory level.
#[derive(Debug, Default)]
struct LevelOutcome {
    files_copied: u64,
    subdirectories: Vec<DirectoryPair>,
}

/// Copy a file or directory tree to `target`.
///
/// `target` is the final path of the copy, not its parent, and its parent
/// must already exist. Existing files at the target are replaced; existing
/// directories are merged into. Directory children are copied concurrently
/// with no ordering guarantee. The first failure aborts the copy and anything
/// already copied stays in place.
///
/// # Arguments
///
/// * `source` - Source file or directory path
/// * `target` - Target path
///
/// # Errors
///
/// * If the source does not exist
/// * If the target lies inside the source tree
/// * If the target is a directory containing the source
/// * If a file would overwrite an existing directory
/// * If any directory cannot be read or created
/// * If any file copy fails (fail-fast behavior)
pub fn copy_tree(source: &Path, target: &Path) -> Result<CopyStats, CopyError> {
    log::debug!("Copying: {} -> {}", source.display(), target.display());

    if is_within(target, source) {
        return Err(CopyError::TargetInsideSource {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
        });
    }

    if is_within(source, target) {
        return Err(CopyError::TargetContainsSource {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
        });
    }

    match classify(source) {
        NodeKind::Missing => Err(CopyError::SourceVanished {
            path: source.to_path_buf(),
        }),
        NodeKind::File => {
            copy_file(source, target)?;
            Ok(CopyStats {
                files_copied: 1,
                directories: 0,
            })
        }
        NodeKind::Directory => copy_directory(source, target),
    }
}

/// Copy a single file, replacing a file or symlink already at the target.
///
/// The existing node is removed first rather than truncated in place. An
/// existing directory is never removed.
///
/// # Errors
///
/// * If the target is a directory
/// * If the existing target cannot be removed
/// * If the copy operation fails
pub fn copy_file(source: &Path, target: &Path) -> Result<(), CopyError> {
    match fs::symlink_metadata(target) {
        Ok(metadata) if metadata.is_dir() => {
            return Err(CopyError::TargetIsDirectory {
                path: target.to_path_buf(),
            });
        }
        Ok(_) => match fs::remove_file(target) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => {
                return Err(CopyError::RemoveError {
                    path: target.to_path_buf(),
                    io_error: e,
                });
            }
            _ => log::trace!("Replaced existing file {}", target.display()),
        },
        Err(_) => {}
    }

    copy_file_with_reflink(source, target)
}

/// Whether `path` is `root` or lies below it, compared on absolute, cleaned
/// paths.
#[must_use]
pub fn is_within(path: &Path, root: &Path) -> bool {
    match (path::absolute(path), path::absolute(root)) {
        (Ok(path), Ok(root)) => path.clean().starts_with(root.clean()),
        _ => false,
    }
}

/// Copy a directory tree level by level.
///
/// Each level's directories are processed in parallel, and the subdirectories
/// they discover form the next level, so stack depth does not grow with tree
/// depth.
fn copy_directory(source: &Path, target: &Path) -> Result<CopyStats, CopyError> {
    let mut stats = CopyStats::default();
    let mut frontier = vec![DirectoryPair {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
    }];

    while !frontier.is_empty() {
        log::trace!("Copying level of {} directories", frontier.len());

        let outcomes = frontier
            .par_iter()
            .map(|pair| copy_level(&pair.source, &pair.target))
            .collect::<Result<Vec<_>, _>>()?;

        stats.directories += frontier.len() as u64;
        frontier = Vec::new();

        for outcome in outcomes {
            stats.files_copied += outcome.files_copied;
            frontier.extend(outcome.subdirectories);
        }
    }

    log::debug!(
        "Copied {} files in {} directories to {}",
        stats.files_copied,
        stats.directories,
        target.display()
    );

    Ok(stats)
}

/// Create `target`, then copy the files of `source` into it in parallel.
///
/// Subdirectories are returned rather than copied.
fn copy_level(source: &Path, target: &Path) -> Result<LevelOutcome, CopyError> {
    // A file in the way of the directory is replaced
    if !is_directory(target) {
        remove_recursive(target).map_err(|e| CopyError::RemoveError {
            path: target.to_path_buf(),
            io_error: e,
        })?;
    }

    ensure_directory(target).map_err(|e| CopyError::CreateDirError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    let names = read_child_names(source)?;

    let children = names
        .par_iter()
        .map(|name| {
            let child_source = source.join(name);
            let child_target = target.join(name);

            match classify(&child_source) {
                NodeKind::Missing => Err(CopyError::SourceVanished { path: child_source }),
                NodeKind::Directory => Ok(Some(DirectoryPair {
                    source: child_source,
                    target: child_target,
                })),
                NodeKind::File => {
                    copy_file(&child_source, &child_target)?;
                    Ok(None)
                }
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut outcome = LevelOutcome::default();
    for child in children {
        match child {
            Some(pair) => outcome.subdirectories.push(pair),
            None => outcome.files_copied += 1,
        }
    }

    Ok(outcome)
}

fn read_child_names(dir: &Path) -> Result<Vec<OsString>, CopyError> {
    let read_dir = fs::read_dir(dir).map_err(|e| CopyError::ReadDirError {
        path: dir.to_path_buf(),
        io_error: e,
    })?;

    read_dir
        .map(|entry| {
            entry
                .map(|entry| entry.file_name())
                .map_err(|e| CopyError::ReadDirError {
                    path: dir.to_path_buf(),
                    io_error: e,
                })
        })
        .collect()
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Try reflink first (copy-on-write, instant on APFS/Btrfs/ReFS)
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}
