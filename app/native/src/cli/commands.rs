//! CLI definition using Clap.
//!
//! Deskpaper has no subcommands. Both folders are read from the environment
//! through [`Config::from_env`]; the flags only override them for a single
//! invocation.

use clap::Parser;

use super::output::ConsoleReporter;
use crate::config::Config;
use crate::display::ScreenCounter;
use crate::wallpaper::{OsaScriptSetter, Outcome, RandomPicker, Runner};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deskpaper - sets a random wallpaper picked for the current display setup.
#[derive(Parser, Debug, Default)]
#[command(name = "deskpaper")]
#[command(author, version = APP_VERSION, about, long_about = None)]
pub struct Cli {
    /// Folder with wallpapers for a single display [overrides: SINGLE_DISPLAY_FOLDER]
    #[arg(long, value_name = "DIR")]
    pub single_display_folder: Option<String>,

    /// Folder with wallpapers for two or more displays [overrides: MULTI_DISPLAY_FOLDER]
    #[arg(long, value_name = "DIR")]
    pub multi_display_folder: Option<String>,
}

impl Cli {
    /// Builds the configuration from the environment and the parsed flags.
    #[must_use]
    pub fn config(&self) -> Config { self.config_over(Config::from_env()) }

    /// Applies the parsed flags on top of `base`.
    #[must_use]
    pub fn config_over(&self, base: Config) -> Config {
        base.with_overrides(
            self.single_display_folder.as_deref(),
            self.multi_display_folder.as_deref(),
        )
    }

    /// Performs one wallpaper run with the macOS collaborators.
    #[must_use]
    pub fn execute(&self) -> Outcome {
        let config = self.config();
        tracing::debug!(?config, "cli: resolved configuration");

        let displays = ScreenCounter;
        let setter = OsaScriptSetter::new();
        let mut picker = RandomPicker::new();

        Runner::new(&config, &displays, &setter).run(&mut picker, &mut ConsoleReporter)
    }
}
