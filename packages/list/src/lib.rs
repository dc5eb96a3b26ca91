//! Directory listing for fsops.
//!
//! Lists the entries of a directory, optionally walking the whole tree, with:
//!
//! * Case-insensitive extension filtering
//! * Glob filtering on the path relative to the listed root (`globset`)
//! * Name-only or absolute-path identifiers
//! * Parallel tree traversal using `jwalk`
//!
//! # Example
//!
//! ```rust,ignore
//! use fsops_list::{ListOptions, list_entries};
//!
//! let options = ListOptions::new()
//!     .with_extensions(["rs", "toml"])
//!     .with_recursive(true)
//!     .with_full_path(true);
//!
//! for path in list_entries(Path::new("."), &options)? {
//!     println!("{path}");
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod filter;
mod list;
mod options;

pub use error::ListError;
pub use list::list_entries;
pub use options::ListOptions;
