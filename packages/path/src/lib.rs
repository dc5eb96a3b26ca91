//! Path handling for fsops.
//!
//! This crate provides the pure, I/O-free path helpers every other fsops crate
//! builds on:
//!
//! * Separator normalization (`/` and `\` collapse to the platform separator)
//! * [`PathSpec`] - a normalized path with basename/extension accessors
//! * Destination resolution (literal file target vs. directory target)
//! * Working directory lookup
//!
//! # Example
//!
//! ```rust
//! use fsops_path::{PathSpec, resolve_destination};
//!
//! let source = PathSpec::new("a/b/file.txt");
//! let resolved = resolve_destination(source.basename().unwrap_or_default(), "dest/");
//! assert!(resolved.final_path.ends_with("file.txt"));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod cwd;
mod destination;
mod normalize;

pub use cwd::working_directory;
pub use destination::{DestinationResolution, resolve_destination};
pub use normalize::{PathSpec, normalize_separators};
