//! Deskpaper - sets a random macOS wallpaper chosen for the current display setup.
//!
//! One folder of wallpapers is used when a single display is connected and
//! another when several are. Each run counts the displays, picks a random
//! image from the matching folder, and applies it to every desktop.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod platform;
pub mod wallpaper;

pub use config::{Config, Setup};
pub use display::{DisplayCount, DisplayCounter, ScreenCounter};
pub use error::{Error, Result};
pub use wallpaper::{Outcome, Runner};
