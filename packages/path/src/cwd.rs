//! Working directory lookup.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::env;
use std::io;

use crate::normalize::normalize_separators;

/// Current working directory of the process, separator-normalized.
///
/// Read fresh on every call so changes made elsewhere in the process are
/// observed.
///
/// # Errors
///
/// * If the working directory has been removed or cannot be read
pub fn working_directory() -> io::Result<String> {
    let cwd = env::current_dir()?;
    Ok(normalize_separators(&cwd.to_string_lossy()))
}
