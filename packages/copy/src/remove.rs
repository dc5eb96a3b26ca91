//! Recursive removal and directory creation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

/// Remove a file or directory tree.
///
/// Removing a path that does not exist succeeds. Symlinks are removed, never
/// followed.
///
/// # Errors
///
/// * If the node exists but cannot be removed
pub fn remove_recursive(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::trace!("Nothing to remove at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    log::debug!("Removing {}", path.display());

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        // Someone else got there first
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Create a directory and all missing ancestors.
///
/// Creating a directory that already exists succeeds.
///
/// # Errors
///
/// * If the directory cannot be created, including when a non-directory
///   already occupies the path
pub fn ensure_directory(path: &Path) -> io::Result<()> {
    log::trace!("Ensuring directory {}", path.display());
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = TempDir::new().unwrap();

        remove_recursive(&dir.path().join("missing")).unwrap();
        remove_recursive(&dir.path().join("missing/deeper")).unwrap();
    }

    #[test]
    fn test_remove_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "content").unwrap();

        remove_recursive(&file).unwrap();

        assert!(!file.exists());
    }

    #[test]
    fn test_remove_tree() {
        let dir = TempDir::new().unwrap();
        let tree = dir.path().join("tree");
        fs::create_dir_all(tree.join("a/b/c")).unwrap();
        fs::write(tree.join("a/b/c/leaf.txt"), "leaf").unwrap();
        fs::write(tree.join("top.txt"), "top").unwrap();

        remove_recursive(&tree).unwrap();

        assert!(!tree.exists());
        assert!(dir.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_symlink_keeps_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("kept.txt"), "kept").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        remove_recursive(&link).unwrap();

        assert!(!link.exists());
        assert!(target.join("kept.txt").exists());
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_directory(&nested).unwrap();
        ensure_directory(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_directory_over_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();

        assert!(ensure_directory(&file).is_err());
    }
}
