//! Configuration types for fsops.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use fsops_list::ListOptions;
use serde::{Deserialize, Serialize};

/// Defaults for directory listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Extensions to keep (case-insensitive, leading dot optional).
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Walk subdirectories.
    #[serde(default)]
    pub recursive: bool,

    /// Emit absolute paths instead of names.
    #[serde(default)]
    pub full_path: bool,

    /// Glob matched against paths relative to the listed directory.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl ListConfig {
    /// Convert to listing options.
    #[must_use]
    pub fn to_options(&self) -> ListOptions {
        ListOptions {
            extensions: self.extensions.clone(),
            recursive: self.recursive,
            full_path: self.full_path,
            pattern: self.pattern.clone(),
        }
    }
}

/// fsops configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Worker threads for parallel copy and listing. Defaults to the CPU count.
    #[serde(default)]
    pub threads: Option<usize>,

    /// Listing defaults.
    #[serde(default)]
    pub list: ListConfig,
}

impl Config {
    /// Effective worker thread count.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.threads
            .filter(|&threads| threads > 0)
            .unwrap_or_else(num_cpus::get)
    }
}

/// A loaded configuration with metadata.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// Path of the file it came from, `None` when defaults are in use.
    pub config_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_count_defaults_to_cpus() {
        assert_eq!(Config::default().thread_count(), num_cpus::get());

        let zero = Config {
            threads: Some(0),
            ..Config::default()
        };
        assert_eq!(zero.thread_count(), num_cpus::get());

        let four = Config {
            threads: Some(4),
            ..Config::default()
        };
        assert_eq!(four.thread_count(), 4);
    }

    #[test]
    fn test_list_config_to_options() {
        let list = ListConfig {
            extensions: Some(vec!["rs".to_string()]),
            recursive: true,
            full_path: false,
            pattern: Some("src/**".to_string()),
        };

        let options = list.to_options();

        assert_eq!(options.extensions, Some(vec!["rs".to_string()]));
        assert!(options.recursive);
        assert!(!options.full_path);
        assert_eq!(options.pattern.as_deref(), Some("src/**"));
    }
}
