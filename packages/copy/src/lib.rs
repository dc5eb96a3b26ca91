//! Parallel recursive copying for fsops.
//!
//! This crate provides the tree primitives the fsops operations are built on:
//!
//! * Recursive copy with overwrite-on-conflict semantics
//! * Level-by-level directory traversal with `rayon` parallelism per level
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Forced recursive removal and idempotent directory creation
//!
//! # Example
//!
//! ```rust,ignore
//! use fsops_copy::{copy_tree, ensure_directory};
//!
//! ensure_directory(Path::new("backup"))?;
//! let stats = copy_tree(Path::new("project"), Path::new("backup/project"))?;
//! println!("{} files copied", stats.files_copied);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod remove;

pub use copy::{CopyStats, copy_file, copy_tree, is_within};
pub use error::CopyError;
pub use remove::{ensure_directory, remove_recursive};
