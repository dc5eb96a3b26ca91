//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fsops_operations::ListOptions;

/// CLI arguments for fsops.
#[derive(Debug, Parser)]
#[command(
    name = "fsops",
    about = "Copy, move, list and inspect files and directory trees",
    version
)]
pub struct Args {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of the discovered one.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Worker threads for parallel copy and listing.
    #[arg(long, short = 'j', global = true)]
    pub threads: Option<usize>,

    /// Enable verbose output.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a path with normalized separators.
    Normalize {
        /// Path to normalize.
        path: String,
    },

    /// Print the working directory.
    Cwd,

    /// Report whether a path exists (exit code 1 if it does not).
    Exists {
        /// Path to probe.
        path: String,
    },

    /// Print whether a path is a file, a directory or missing.
    Kind {
        /// Path to probe.
        path: String,
    },

    /// List the entries of a directory.
    Ls {
        /// Directory to list.
        #[arg(default_value = ".")]
        path: String,

        /// Only list entries with this extension (repeatable).
        #[arg(long = "ext", short = 'e')]
        extensions: Vec<String>,

        /// Walk subdirectories, listing leaf files only.
        #[arg(long, short = 'r')]
        recursive: bool,

        /// Print absolute paths instead of names.
        #[arg(long)]
        full_path: bool,

        /// Only list entries whose relative path matches this glob.
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Copy a file or directory tree.
    Cp {
        /// Source path.
        source: String,
        /// Destination file (has an extension) or directory.
        destination: String,
    },

    /// Move a file or directory tree.
    Mv {
        /// Source path.
        source: String,
        /// Destination file (has an extension) or directory.
        destination: String,
    },

    /// Remove files or directory trees. Missing paths are ignored.
    Rm {
        /// Paths to remove.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Create directories and any missing parents.
    Mkdir {
        /// Directories to create.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the contents of a file.
    Cat {
        /// File to read.
        path: String,

        /// Text encoding (utf8, latin1).
        #[arg(long, default_value = "utf8")]
        encoding: String,

        /// Write the raw bytes instead of decoding.
        #[arg(long)]
        raw: bool,
    },

    /// Write text to a file, creating parent directories.
    Write {
        /// File to write.
        path: String,

        /// Content to write; read from stdin when omitted.
        content: Option<String>,
    },
}

/// Listing flags from the `ls` subcommand.
#[derive(Debug, Clone, Default)]
pub struct ListFlags {
    /// Extensions given with `--ext`.
    pub extensions: Vec<String>,
    /// `--recursive` was given.
    pub recursive: bool,
    /// `--full-path` was given.
    pub full_path: bool,
    /// Glob given with `--pattern`.
    pub pattern: Option<String>,
}

impl ListFlags {
    /// Layer the flags over configured defaults.
    ///
    /// Extensions and pattern replace the configured values when given;
    /// boolean flags can only switch a default on.
    #[must_use]
    pub fn apply(self, mut options: ListOptions) -> ListOptions {
        if !self.extensions.is_empty() {
            options.extensions = Some(self.extensions);
        }
        if self.pattern.is_some() {
            options.pattern = self.pattern;
        }
        options.recursive |= self.recursive;
        options.full_path |= self.full_path;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_copy() {
        let args = Args::parse_from(["fsops", "cp", "a/file.txt", "dest/", "-v"]);

        assert!(args.verbose);
        assert!(matches!(
            args.command,
            Command::Cp { ref source, ref destination }
                if source == "a/file.txt" && destination == "dest/"
        ));
    }

    #[test]
    fn test_parse_ls_flags() {
        let args = Args::parse_from(["fsops", "ls", "src", "-e", "rs", "-e", "toml", "-r"]);

        let Command::Ls {
            path,
            extensions,
            recursive,
            full_path,
            pattern,
        } = args.command
        else {
            panic!("expected ls");
        };

        assert_eq!(path, "src");
        assert_eq!(extensions, vec!["rs", "toml"]);
        assert!(recursive);
        assert!(!full_path);
        assert_eq!(pattern, None);
    }

    #[test]
    fn test_list_flags_override_defaults() {
        let defaults = ListOptions::new().with_extension("md").with_full_path(true);
        let flags = ListFlags {
            extensions: vec!["rs".to_string()],
            recursive: true,
            ..ListFlags::default()
        };

        let options = flags.apply(defaults);

        assert_eq!(options.extensions, Some(vec!["rs".to_string()]));
        assert!(options.recursive);
        assert!(options.full_path);
    }

    #[test]
    fn test_list_flags_keep_defaults_when_absent() {
        let defaults = ListOptions::new().with_extension("md").with_pattern("docs/**");

        let options = ListFlags::default().apply(defaults.clone());

        assert_eq!(options, defaults);
    }
}
