//! Configuration loading for fsops.
//!
//! This crate provides the optional TOML configuration read by the fsops CLI:
//! the worker thread count and defaults for directory listings.
//!
//! # Lookup Order
//!
//! * An explicitly supplied path
//! * `fsops.toml` in the working directory
//! * `fsops/config.toml` in the platform configuration directory
//!
//! # Example
//!
//! ```rust,ignore
//! use fsops_config::load_config;
//!
//! let loaded = load_config(None, &std::env::current_dir()?)?;
//! println!("threads: {}", loaded.config.thread_count());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{CONFIG_FILE_NAME, discover_config};
pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{Config, ListConfig, LoadedConfig};

use std::path::Path;

/// Load the configuration, falling back to defaults when no file is found.
///
/// # Arguments
///
/// * `explicit` - Path given on the command line, if any
/// * `cwd` - Working directory to search for a local config file
///
/// # Errors
///
/// * If the selected file cannot be read
/// * If the selected file cannot be parsed
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = explicit.map_or_else(|| discover_config(cwd), |p| Some(p.to_path_buf()));

    let Some(path) = path else {
        log::debug!("No config file found, using defaults");
        return Ok(LoadedConfig::default());
    };

    let config = load_toml_config(&path)?;

    Ok(LoadedConfig {
        config,
        config_path: Some(path),
    })
}
