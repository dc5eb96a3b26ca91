//! Configuration errors.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an fsops config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadError {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("Failed to parse TOML config {}: {source}", path.display())]
    TomlParseError {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A key parsed but holds a value fsops cannot use.
    #[error("Invalid value for `{key}` in {}: {message}", path.display())]
    InvalidValue {
        /// Config file path.
        path: PathBuf,
        /// Dotted key, e.g. `list.extensions`.
        key: &'static str,
        /// What is wrong with the value.
        message: String,
    },
}
