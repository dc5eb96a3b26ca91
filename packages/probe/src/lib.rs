//! Filesystem probes for fsops.
//!
//! Every probe here is a predicate: any error while reading metadata
//! (missing path, permission denied, dangling symlink) collapses to
//! `false` / [`NodeKind::Missing`]. Results are never cached since the tree
//! may change between calls.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod kind;

pub use kind::{NodeKind, classify, exists, is_directory, is_file};
