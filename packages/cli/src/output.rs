//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;

/// Print the outcome of a copy or move.
pub fn print_transfer(verb: &str, source: &str, destination: &Path) {
    println!(
        "{} {} {} {} {}",
        "✓".green(),
        verb.bold(),
        source,
        "->".dimmed(),
        destination.display().to_string().cyan()
    );
}

/// Print the outcome of an operation on a single path.
pub fn print_done(verb: &str, path: &str) {
    println!("{} {} {}", "✓".green(), verb.bold(), path);
}

/// Print a boolean probe result.
pub fn print_probe(path: &str, present: bool) {
    if present {
        println!("{} {}", "yes".green(), path);
    } else {
        println!("{} {}", "no".red(), path);
    }
}

/// Log the config file in use.
pub fn log_config_source(path: Option<&Path>) {
    if let Some(path) = path {
        log::info!("Using config {}", path.display());
    }
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
