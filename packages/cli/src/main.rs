//! fsops CLI entry point.
//!
//! Copy, move, list and inspect files and directory trees from the shell.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;
use std::io::{self, Read, Write};

use clap::Parser;

use args::{Args, Command, ListFlags};
use fsops_config::load_config;
use fsops_operations::{
    Encoding, FileContents, NodeKind, copy, ensure_directory, list_entries, move_path, node_kind,
    normalize_separators, path_exists, read_file_contents, remove_recursive, working_directory,
    write_file_contents,
};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Main application logic.
///
/// Returns `Ok(false)` when a probe command reports a negative answer.
fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let loaded = load_config(args.config.as_deref(), &cwd)?;
    output::log_config_source(loaded.config_path.as_deref());

    let threads = args
        .threads
        .filter(|&n| n > 0)
        .unwrap_or_else(|| loaded.config.thread_count());
    log::debug!("Using {threads} worker threads");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    match args.command {
        Command::Normalize { path } => {
            println!("{}", normalize_separators(&path));
        }
        Command::Cwd => {
            println!("{}", working_directory()?);
        }
        Command::Exists { path } => {
            let present = path_exists(&path);
            output::print_probe(&path, present);
            return Ok(present);
        }
        Command::Kind { path } => {
            let kind = node_kind(&path);
            println!("{kind}");
            return Ok(kind != NodeKind::Missing);
        }
        Command::Ls {
            path,
            extensions,
            recursive,
            full_path,
            pattern,
        } => {
            let flags = ListFlags {
                extensions,
                recursive,
                full_path,
                pattern,
            };
            let options = flags.apply(loaded.config.list.to_options());

            let mut entries = list_entries(&path, &options)?;
            entries.sort();

            let mut stdout = io::stdout().lock();
            for entry in entries {
                writeln!(stdout, "{entry}")?;
            }
        }
        Command::Cp {
            source,
            destination,
        } => {
            let target = copy(&source, &destination)?;
            output::print_transfer("copied", &source, &target);
        }
        Command::Mv {
            source,
            destination,
        } => {
            let target = move_path(&source, &destination)?;
            output::print_transfer("moved", &source, &target);
        }
        Command::Rm { paths } => {
            for path in paths {
                remove_recursive(&path)?;
                output::print_done("removed", &path);
            }
        }
        Command::Mkdir { paths } => {
            for path in paths {
                ensure_directory(&path)?;
                output::print_done("created", &path);
            }
        }
        Command::Cat {
            path,
            encoding,
            raw,
        } => {
            let encoding = if raw {
                None
            } else {
                Some(encoding.parse::<Encoding>()?)
            };

            let contents = read_file_contents(&path, encoding)?;
            let mut stdout = io::stdout().lock();
            match contents {
                FileContents::Text(text) => write!(stdout, "{text}")?,
                FileContents::Bytes(bytes) => stdout.write_all(&bytes)?,
            }
            stdout.flush()?;
        }
        Command::Write { path, content } => {
            let bytes = match content {
                Some(content) => content.into_bytes(),
                None => {
                    let mut buffer = Vec::new();
                    io::stdin().lock().read_to_end(&mut buffer)?;
                    buffer
                }
            };

            write_file_contents(&path, &bytes)?;
            output::print_done("wrote", &path);
        }
    }

    Ok(true)
}
