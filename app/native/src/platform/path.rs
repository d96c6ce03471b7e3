//! Path helpers for folder values coming from the environment.
//!
//! Folder paths are usually exported from a shell profile, so `~` is expanded
//! here the same way the shell would.

use std::path::PathBuf;

/// Expands a leading tilde in `path` to the user's home directory.
///
/// Absolute and relative paths are returned unchanged, including any
/// surrounding whitespace, since directory names may carry it.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands a configured folder value, treating blank values as unset.
#[must_use]
pub fn expand_folder(value: Option<&str>) -> Option<PathBuf> {
    value.filter(|value| !value.trim().is_empty()).map(expand)
}
