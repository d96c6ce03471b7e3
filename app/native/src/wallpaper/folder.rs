//! Wallpaper folder validation.

use std::path::Path;

use crate::error::{Error, Result};

/// Checks that a configured folder is set and is an existing directory.
///
/// `setup` names the display setup the folder belongs to and only appears in
/// the error for an unset folder.
///
/// # Errors
///
/// Returns [`Error::FolderUnset`] when `path` is `None` or empty,
/// [`Error::FolderMissing`] when nothing exists at `path`, and
/// [`Error::NotADirectory`] when `path` is not a directory.
pub fn validate_folder<'a>(path: Option<&'a Path>, setup: &'static str) -> Result<&'a Path> {
    let path = match path {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Err(Error::FolderUnset { setup }),
    };

    if !path.exists() {
        return Err(Error::FolderMissing(path.to_path_buf()));
    }

    if !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    Ok(path)
}
