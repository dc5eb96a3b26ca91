//! Reading `fsops.toml` files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Config;

/// Read and validate a TOML config file.
///
/// Missing keys take their defaults. An empty file is a valid config.
///
/// # Arguments
///
/// * `path` - Config file to read
///
/// # Errors
///
/// * If the file cannot be read
/// * If the contents are not valid TOML for [`Config`]
/// * If `list.extensions` contains a blank entry
pub fn load_toml_config(path: &Path) -> Result<Config, ConfigError> {
    log::debug!("Reading config {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = toml::from_str::<Config>(&text).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&config, path)?;

    log::trace!("Config from {}: {config:?}", path.display());

    Ok(config)
}

fn validate(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let blank = config
        .list
        .extensions
        .iter()
        .flatten()
        .any(|ext| ext.trim_start_matches('.').trim().is_empty());

    if blank {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "list.extensions",
            message: "extensions must not be empty".to_string(),
        });
    }

    Ok(())
}
