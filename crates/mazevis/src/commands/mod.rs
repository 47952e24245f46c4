pub mod completion;
pub mod config;
pub mod solve;

use colored::Colorize;
use mazevis_core::{DEFAULT_MAZE_FILES, LoadError};
use std::path::PathBuf;

/// The given maze files, or the default set when none were given.
pub fn maze_paths(files: Vec<PathBuf>) -> Vec<PathBuf> {
    if files.is_empty() {
        DEFAULT_MAZE_FILES.iter().map(PathBuf::from).collect()
    } else {
        files
    }
}

/// Report skipped files on stderr.
pub fn print_load_failures(failures: &[LoadError]) {
    for failure in failures {
        eprintln!("{} {failure}", "skipped:".yellow().bold());
    }
}

pub fn print_version() {
    println!(
        "{} {}",
        "mazevis".bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
}
