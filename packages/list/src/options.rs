//! Listing options.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Options for [`list_entries`](crate::list_entries).
///
/// The default lists the direct children of a directory by name, without
/// filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only emit entries whose extension is one of these (case-insensitive,
    /// leading dot optional). `None` disables extension filtering.
    pub extensions: Option<Vec<String>>,
    /// Walk the whole tree, emitting leaf files only.
    pub recursive: bool,
    /// Emit absolute, normalized paths instead of bare names.
    pub full_path: bool,
    /// Glob matched against each entry's path relative to the listed root.
    pub pattern: Option<String>,
}

impl ListOptions {
    /// Create options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single accepted extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions
            .get_or_insert_with(Vec::new)
            .push(extension.into());
        self
    }

    /// Add several accepted extensions.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions
            .get_or_insert_with(Vec::new)
            .extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Set whether the listing descends into subdirectories.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether identifiers are absolute paths.
    #[must_use]
    pub fn with_full_path(mut self, full_path: bool) -> Self {
        self.full_path = full_path;
        self
    }

    /// Set the glob pattern entries must match.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ListOptions::new();

        assert_eq!(options.extensions, None);
        assert!(!options.recursive);
        assert!(!options.full_path);
        assert_eq!(options.pattern, None);
    }

    #[test]
    fn test_builder_accumulates_extensions() {
        let options = ListOptions::new()
            .with_extension("js")
            .with_extensions(["ts", "tsx"])
            .with_recursive(true);

        assert_eq!(
            options.extensions,
            Some(vec!["js".to_string(), "ts".to_string(), "tsx".to_string()])
        );
        assert!(options.recursive);
    }
}
