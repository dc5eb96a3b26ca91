//! Removal and directory creation over string paths.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use fsops_path::PathSpec;

use crate::error::OperationError;

/// Remove a file or directory tree. A missing path is not an error.
///
/// # Errors
///
/// * If the node exists but cannot be removed
pub fn remove_recursive(path: &str) -> Result<(), OperationError> {
    let path = PathSpec::new(path);

    fsops_copy::remove_recursive(path.as_path()).map_err(|e| OperationError::IoError {
        path: path.into_path_buf(),
        source: e,
    })
}

/// Create a directory and any missing ancestors. An existing directory is not
/// an error.
///
/// # Errors
///
/// * If the directory cannot be created
pub fn ensure_directory(path: &str) -> Result<(), OperationError> {
    let path = PathSpec::new(path);

    fsops_copy::ensure_directory(path.as_path()).map_err(|e| OperationError::IoError {
        path: path.into_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn s(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_remove_missing_path_succeeds() {
        let dir = TempDir::new().unwrap();

        remove_recursive(&s(&dir.path().join("never/existed"))).unwrap();
    }

    #[test]
    fn test_remove_tree() {
        let dir = TempDir::new().unwrap();
        let tree = dir.path().join("tree");
        fs::create_dir_all(tree.join("sub")).unwrap();
        fs::write(tree.join("sub/file.txt"), "").unwrap();

        remove_recursive(&s(&tree)).unwrap();

        assert!(!tree.exists());
    }

    #[test]
    fn test_ensure_directory_twice() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");

        ensure_directory(&s(&nested)).unwrap();
        ensure_directory(&format!("{}/", s(&nested))).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_directory_over_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();

        let result = ensure_directory(&s(&file));

        assert!(matches!(result, Err(OperationError::IoError { .. })));
    }
}
