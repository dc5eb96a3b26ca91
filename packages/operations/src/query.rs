//! Probes and listing over string paths.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use fsops_list::ListOptions;
use fsops_path::PathSpec;
use fsops_probe::NodeKind;

use crate::error::OperationError;

/// Whether anything exists at `path`. Never fails.
#[must_use]
pub fn path_exists(path: &str) -> bool {
    fsops_probe::exists(PathSpec::new(path).as_path())
}

/// Whether `path` is a directory. Never fails.
#[must_use]
pub fn is_directory(path: &str) -> bool {
    fsops_probe::is_directory(PathSpec::new(path).as_path())
}

/// Whether `path` is a file. Never fails.
#[must_use]
pub fn is_file(path: &str) -> bool {
    fsops_probe::is_file(PathSpec::new(path).as_path())
}

/// Classify the node at `path`. Never fails.
#[must_use]
pub fn node_kind(path: &str) -> NodeKind {
    fsops_probe::classify(PathSpec::new(path).as_path())
}

/// List the entries of the directory at `path`.
///
/// See [`fsops_list::list_entries`] for the listing rules.
///
/// # Errors
///
/// * If the directory cannot be enumerated or a recursive walk hits an
///   entry it cannot probe
/// * If the glob pattern in `options` is invalid
pub fn list_entries(path: &str, options: &ListOptions) -> Result<Vec<String>, OperationError> {
    Ok(fsops_list::list_entries(
        PathSpec::new(path).as_path(),
        options,
    )?)
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
    fn test_probes_never_fail() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        assert!(path_exists(&s(&file)));
        assert!(is_file(&s(&file)));
        assert!(is_directory(&format!("{}/", s(dir.path()))));
        assert_eq!(node_kind(&s(&file)), NodeKind::File);

        let missing = s(&dir.path().join("missing"));
        assert!(!path_exists(&missing));
        assert!(!is_file(&missing));
        assert!(!is_directory(&missing));
        assert_eq!(node_kind(&missing), NodeKind::Missing);
    }

    #[test]
    fn test_list_entries_wraps_list_errors() {
        let dir = TempDir::new().unwrap();

        let result = list_entries(&s(&dir.path().join("missing")), &ListOptions::new());

        assert!(matches!(result, Err(OperationError::ListError(_))));
    }

    #[test]
    fn test_list_entries_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        fs::write(dir.path().join("b.ts"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        let options = ListOptions::new().with_extensions(["js", "ts"]);
        let mut entries = list_entries(&s(dir.path()), &options).unwrap();
        entries.sort();

        assert_eq!(entries, vec!["a.js", "b.ts"]);
    }
}
