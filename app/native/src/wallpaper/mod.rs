//! Wallpaper selection and application.
//!
//! - [`folder`] - Folder validation
//! - [`selector`] - Image listing and random selection
//! - [`applier`] - Applying an image through `osascript`
//! - [`runner`] - The end-to-end run

pub mod applier;
pub mod folder;
pub mod runner;
pub mod selector;

pub use applier::{CommandOutput, OsaScriptSetter, WallpaperSetter};
pub use folder::validate_folder;
pub use runner::{Level, Outcome, Reporter, Runner, Transcript};
pub use selector::{IndexPicker, RandomPicker, is_supported_image, list_images, select_image};
