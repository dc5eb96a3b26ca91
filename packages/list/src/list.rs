//! Directory enumeration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{self, Path, PathBuf};

use fsops_path::normalize_separators;
use path_clean::PathClean;

use crate::error::ListError;
use crate::filter::EntryFilter;
use crate::options::ListOptions;

/// List the entries of a directory.
///
/// Without `recursive`, every direct child (files and directories alike) that
/// passes the filters is emitted. With `recursive`, the whole tree is walked
/// in parallel and only leaf files are emitted; directories are traversed but
/// never listed themselves. Symlinks are followed for classification but
/// symlinked directories are not descended into.
///
/// Output order is unspecified.
///
/// # Arguments
///
/// * `dir` - Directory to list
/// * `options` - Filtering, recursion and identifier options
///
/// # Errors
///
/// * If the glob pattern is invalid
/// * If `dir` cannot be enumerated
/// * If any entry cannot be probed during a recursive walk
pub fn list_entries(dir: &Path, options: &ListOptions) -> Result<Vec<String>, ListError> {
    log::debug!(
        "Listing {} (recursive: {}, full path: {})",
        dir.display(),
        options.recursive,
        options.full_path
    );

    let filter = EntryFilter::new(options)?;

    let read_dir = fs::read_dir(dir).map_err(|e| ListError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let root = if options.full_path {
        Some(absolute_root(dir)?)
    } else {
        None
    };
    let naming = Naming { root };

    let entries = if options.recursive {
        drop(read_dir);
        list_recursive(dir, &filter, &naming)?
    } else {
        list_direct(dir, read_dir, &filter, &naming)?
    };

    log::debug!("Listed {} entries in {}", entries.len(), dir.display());

    Ok(entries)
}

/// How emitted identifiers are formed.
struct Naming {
    /// Absolute root when full paths are requested.
    root: Option<PathBuf>,
}

impl Naming {
    fn identifier(&self, relative: &Path) -> String {
        match &self.root {
            Some(root) => normalize_separators(&root.join(relative).to_string_lossy()),
            None => relative
                .file_name()
                .map_or_else(String::new, |name| name.to_string_lossy().to_string()),
        }
    }
}

/// Absolute, lexically cleaned form of the listed root.
fn absolute_root(dir: &Path) -> Result<PathBuf, ListError> {
    path::absolute(dir)
        .map(|abs| abs.clean())
        .map_err(|e| ListError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })
}

fn list_direct(
    dir: &Path,
    read_dir: fs::ReadDir,
    filter: &EntryFilter,
    naming: &Naming,
) -> Result<Vec<String>, ListError> {
    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = entry.map_err(|e| ListError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let name = entry.file_name();
        let relative = Path::new(&name);

        if filter.matches(relative) {
            entries.push(naming.identifier(relative));
        }
    }

    Ok(entries)
}

fn list_recursive(
    dir: &Path,
    filter: &EntryFilter,
    naming: &Naming,
) -> Result<Vec<String>, ListError> {
    let mut entries = Vec::new();

    for entry in jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .sort(false)
        .follow_links(false)
    {
        let entry = entry.map_err(|e| ListError::Entry {
            path: e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
            message: e.to_string(),
        })?;

        let path = entry.path();

        // Skip the root directory itself
        if path == dir {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        if file_type.is_symlink() {
            let metadata = fs::metadata(&path).map_err(|e| ListError::Entry {
                path: path.clone(),
                message: e.to_string(),
            })?;
            if metadata.is_dir() {
                log::trace!("Not descending into symlinked directory {}", path.display());
                continue;
            }
        }

        let relative = path.strip_prefix(dir).unwrap_or(&path);
        if filter.matches(relative) {
            entries.push(naming.identifier(relative));
        }
    }

    Ok(entries)
}
