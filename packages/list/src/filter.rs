//! Entry filtering, compiled once per listing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobMatcher};

use crate::error::ListError;
use crate::options::ListOptions;

/// Compiled form of the filtering part of [`ListOptions`].
#[derive(Debug)]
pub struct EntryFilter {
    extensions: Option<HashSet<String>>,
    pattern: Option<GlobMatcher>,
}

impl EntryFilter {
    /// Compile the filters in `options`.
    ///
    /// # Errors
    ///
    /// * If the glob pattern is invalid
    pub fn new(options: &ListOptions) -> Result<Self, ListError> {
        let extensions = options.extensions.as_ref().map(|extensions| {
            extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect()
        });

        let pattern = options
            .pattern
            .as_ref()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(|glob| glob.compile_matcher())
                    .map_err(|e| ListError::Pattern {
                        pattern: pattern.clone(),
                        source: e,
                    })
            })
            .transpose()?;

        Ok(Self {
            extensions,
            pattern,
        })
    }

    /// Whether an entry at `relative` (relative to the listed root) passes.
    pub fn matches(&self, relative: &Path) -> bool {
        self.matches_extension(relative) && self.matches_pattern(relative)
    }

    fn matches_extension(&self, relative: &Path) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };

        relative
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| !ext.is_empty() && extensions.contains(&ext))
    }

    fn matches_pattern(&self, relative: &Path) -> bool {
        self.pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_match_everything() {
        let filter = EntryFilter::new(&ListOptions::new()).unwrap();

        assert!(filter.matches(Path::new("a.js")));
        assert!(filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let options = ListOptions::new().with_extensions([".JS", "ts"]);
        let filter = EntryFilter::new(&options).unwrap();

        assert!(filter.matches(Path::new("a.js")));
        assert!(filter.matches(Path::new("B.Ts")));
        assert!(!filter.matches(Path::new("c.txt")));
        assert!(!filter.matches(Path::new("js")));
        assert!(!filter.matches(Path::new(".js")));
    }

    #[test]
    fn test_pattern_filter() {
        let options = ListOptions::new().with_pattern("src/**/*.rs");
        let filter = EntryFilter::new(&options).unwrap();

        assert!(filter.matches(Path::new("src/lib.rs")));
        assert!(filter.matches(Path::new("src/nested/mod.rs")));
        assert!(!filter.matches(Path::new("tests/lib.rs")));
    }

    #[test]
    fn test_invalid_pattern() {
        let options = ListOptions::new().with_pattern("src/[");
        let result = EntryFilter::new(&options);

        assert!(matches!(result, Err(ListError::Pattern { .. })));
    }
}
