mod app;
mod cli;
mod commands;
mod config;
mod render;
mod theme;

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    CompleteEnv::with_factory(cli::Cli::command).complete();

    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warn, raised by `-v` and lowered by `-q`.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mazevis={level},mazevis_core={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
