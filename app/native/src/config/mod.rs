//! Configuration for Deskpaper.
//!
//! The configuration is two folder paths, one per display setup. It is built
//! once at startup (from the environment, optionally overridden on the command
//! line) and handed to the runner.

pub mod env;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::platform::path::expand_folder;

/// Display setup a folder is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// Exactly one display.
    Single,
    /// Two or more displays.
    Multi,
}

impl Setup {
    /// Returns the setup matching a display count, or `None` for zero displays.
    #[must_use]
    pub const fn for_display_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::Single),
            _ => Some(Self::Multi),
        }
    }

    /// Human readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "single-display",
            Self::Multi => "multi-display",
        }
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// Wallpaper folder configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Folder used when exactly one display is connected.
    pub single_display_folder: Option<PathBuf>,
    /// Folder used when two or more displays are connected.
    pub multi_display_folder: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from raw folder values.
    ///
    /// Blank values are treated as unset and `~` is expanded.
    #[must_use]
    pub fn from_values(single: Option<&str>, multi: Option<&str>) -> Self {
        Self {
            single_display_folder: expand_folder(single),
            multi_display_folder: expand_folder(multi),
        }
    }

    /// Builds the configuration using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let single = lookup(env::keys::SINGLE_DISPLAY_FOLDER);
        let multi = lookup(env::keys::MULTI_DISPLAY_FOLDER);
        Self::from_values(single.as_deref(), multi.as_deref())
    }

    /// Builds the configuration from `SINGLE_DISPLAY_FOLDER` and `MULTI_DISPLAY_FOLDER`.
    #[must_use]
    pub fn from_env() -> Self { Self::from_lookup(env::var) }

    /// Replaces the folders given on the command line.
    ///
    /// A `None` override keeps the current value; a blank override unsets it.
    #[must_use]
    pub fn with_overrides(mut self, single: Option<&str>, multi: Option<&str>) -> Self {
        if single.is_some() {
            self.single_display_folder = expand_folder(single);
        }
        if multi.is_some() {
            self.multi_display_folder = expand_folder(multi);
        }
        self
    }

    /// Returns the configured folder for `setup`, if any.
    #[must_use]
    pub fn folder(&self, setup: Setup) -> Option<&Path> {
        match setup {
            Setup::Single => self.single_display_folder.as_deref(),
            Setup::Multi => self.multi_display_folder.as_deref(),
        }
    }
}
