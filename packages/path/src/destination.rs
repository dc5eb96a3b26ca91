//! Destination resolution for copy and move.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::normalize::PathSpec;

/// Where a copy or move will land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationResolution {
    /// Path of the node that will be created.
    pub final_path: PathBuf,
    /// Directory that must exist before the node can be created.
    pub parent: PathBuf,
}

/// Resolve the final destination of a copy or move.
///
/// A destination whose last component has an extension is a literal file
/// target and is used verbatim. Anything else is treated as a directory and
/// the source basename is appended to it.
///
/// # Arguments
///
/// * `source_basename` - File name of the node being copied or moved
/// * `destination` - Raw destination string as supplied by the caller
#[must_use]
pub fn resolve_destination(
    source_basename: impl AsRef<OsStr>,
    destination: &str,
) -> DestinationResolution {
    let spec = PathSpec::new(destination);

    let resolution = if spec.has_extension() {
        let parent = parent_or_current(spec.as_path());
        DestinationResolution {
            final_path: spec.into_path_buf(),
            parent,
        }
    } else {
        let parent = spec.into_path_buf();
        DestinationResolution {
            final_path: parent.join(source_basename.as_ref()),
            parent,
        }
    };

    log::trace!(
        "Resolved destination {destination:?} -> {}",
        resolution.final_path.display()
    );

    resolution
}

/// Parent directory of `path`, or `.` when it has none.
fn parent_or_current(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
