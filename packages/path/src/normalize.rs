//! Separator normalization.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Every character accepted as a path separator on input.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Replace every path separator with the platform separator and strip
/// trailing separators.
///
/// The filesystem root (`/`) and drive roots (`C:\`) keep their separator.
/// The function is total and idempotent.
///
/// # Arguments
///
/// * `path` - Raw path string, possibly mixing `/` and `\`
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    let mut normalized: String = path
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { MAIN_SEPARATOR } else { c })
        .collect();

    while normalized.len() > 1 && normalized.ends_with(MAIN_SEPARATOR) && !is_drive_root(&normalized)
    {
        normalized.pop();
    }

    normalized
}

/// Whether `path` is exactly a drive root such as `C:\`.
fn is_drive_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// A separator-normalized path with basename and extension accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
    normalized: String,
}

impl PathSpec {
    /// Normalize `raw` into a new path spec.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: normalize_separators(raw),
        }
    }

    /// The normalized path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The normalized path as a [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.normalized)
    }

    /// Final component of the path, if it has one.
    ///
    /// Paths ending in `..` and bare roots have no basename.
    #[must_use]
    pub fn basename(&self) -> Option<&str> {
        self.as_path().file_name().and_then(|name| name.to_str())
    }

    /// Extension of the final component, without the leading dot.
    ///
    /// Dotfiles such as `.env` and names ending in a bare `.` have no
    /// extension.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.as_path()
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
    }

    /// Whether the final component carries a non-empty extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    /// Consume the spec, returning an owned [`PathBuf`].
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.normalized)
    }
}

impl AsRef<Path> for PathSpec {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for PathSpec {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_normalize_converts_backslashes() {
        assert_eq!(normalize_separators(r"a\b\c.txt"), sep("a/b/c.txt"));
        assert_eq!(normalize_separators(r"a/b\c"), sep("a/b/c"));
    }

    #[test]
    fn test_normalize_strips_trailing_separators() {
        assert_eq!(normalize_separators("dest/"), "dest");
        assert_eq!(normalize_separators(r"dest\\//"), "dest");
    }

    #[test]
    fn test_normalize_keeps_roots() {
        assert_eq!(normalize_separators("/"), sep("/"));
        assert_eq!(normalize_separators("//"), sep("/"));
        assert_eq!(normalize_separators(r"C:\"), sep("C:/"));
        assert_eq!(normalize_separators(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "/",
            "a",
            "a/b/",
            r"a\b\\c\",
            r"C:\Users\x\",
            "./rel/../path//",
            "trailing.dot.",
        ];

        for input in inputs {
            let once = normalize_separators(input);
            assert_eq!(normalize_separators(&once), once, "input: {input:?}");
            assert!(!once.contains(if MAIN_SEPARATOR == '/' { '\\' } else { '/' }));
        }
    }

    #[test]
    fn test_path_spec_basename_and_extension() {
        let spec = PathSpec::new(r"a\b\file.TXT");
        assert_eq!(spec.basename(), Some("file.TXT"));
        assert_eq!(spec.extension(), Some("TXT"));
        assert!(spec.has_extension());

        let dir = PathSpec::new("a/b/dir/");
        assert_eq!(dir.basename(), Some("dir"));
        assert_eq!(dir.extension(), None);
    }

    #[test]
    fn test_path_spec_dotfiles_have_no_extension() {
        assert_eq!(PathSpec::new(".env").extension(), None);
        assert_eq!(PathSpec::new("dir/.gitignore").extension(), None);
        assert_eq!(PathSpec::new("name.").extension(), None);
        assert_eq!(PathSpec::new(".env.local").extension(), Some("local"));
    }
}
