//! CLI module for Deskpaper.
//!
//! Parses the (optional) arguments, builds the configuration, and performs a
//! single wallpaper run against the real display counter and `osascript`.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;
pub use output::ConsoleReporter;

use crate::wallpaper::Outcome;

/// Runs the CLI.
///
/// Parses command-line arguments and performs the wallpaper run. The outcome
/// carries the process exit code.
#[must_use]
pub fn run() -> Outcome {
    let cli = Cli::parse();
    cli.execute()
}
