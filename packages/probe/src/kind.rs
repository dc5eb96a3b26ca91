//! Node classification.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, Metadata};
use std::path::Path;

/// Classification of a path at the moment it was probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A regular file (or anything else that is not a directory).
    File,
    /// A directory.
    Directory,
    /// Nothing could be found at the path.
    Missing,
}

impl NodeKind {
    /// Classify already-fetched metadata.
    #[must_use]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        if metadata.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }

    /// Whether anything exists at the probed path.
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Classify the node at `path`, following symlinks.
///
/// Returns [`NodeKind::Missing`] on any metadata error.
#[must_use]
pub fn classify(path: &Path) -> NodeKind {
    match fs::metadata(path) {
        Ok(metadata) => NodeKind::from_metadata(&metadata),
        Err(e) => {
            log::trace!("Probe of {} failed: {e}", path.display());
            NodeKind::Missing
        }
    }
}

/// Whether anything exists at `path`.
#[must_use]
pub fn exists(path: &Path) -> bool {
    classify(path).exists()
}

/// Whether `path` is a directory.
#[must_use]
pub fn is_directory(path: &Path) -> bool {
    classify(path) == NodeKind::Directory
}

/// Whether `path` is a file.
#[must_use]
pub fn is_file(path: &Path) -> bool {
    classify(path) == NodeKind::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_file_and_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "content").unwrap();

        assert_eq!(classify(&file), NodeKind::File);
        assert_eq!(classify(dir.path()), NodeKind::Directory);
        assert!(is_file(&file));
        assert!(!is_directory(&file));
        assert!(is_directory(dir.path()));
        assert!(!is_file(dir.path()));
    }

    #[test]
    fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        assert_eq!(classify(&missing), NodeKind::Missing);
        assert!(!exists(&missing));
        assert!(!is_file(&missing));
        assert!(!is_directory(&missing));
    }

    #[test]
    fn test_path_through_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "content").unwrap();

        // ENOTDIR rather than ENOENT, still collapses to missing
        assert_eq!(classify(&file.join("child")), NodeKind::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_missing() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert!(!exists(&link));
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeKind::Directory.to_string(), "directory");
        assert_eq!(NodeKind::Missing.to_string(), "missing");
    }
}
