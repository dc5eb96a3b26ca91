//! Configuration file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = "fsops.toml";

/// Find the configuration file to use, if any.
///
/// Looks for [`CONFIG_FILE_NAME`] in `cwd`, then for `fsops/config.toml` in
/// the platform configuration directory.
///
/// # Arguments
///
/// * `cwd` - Directory to search first
#[must_use]
pub fn discover_config(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        log::debug!("Found local config {}", local.display());
        return Some(local);
    }

    let global = dirs::config_dir()?.join("fsops").join("config.toml");
    if global.is_file() {
        log::debug!("Found user config {}", global.display());
        return Some(global);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_local_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            discover_config(dir.path()),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_local_config_must_be_a_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_ne!(
            discover_config(dir.path()),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }
}
