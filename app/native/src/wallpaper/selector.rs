//! Image discovery and random selection.
//!
//! Lists the images in a wallpaper folder by extension and picks one of them
//! through an [`IndexPicker`], so the random source can be swapped out.

use std::fs;
use std::path::{Path, PathBuf};

use natord::compare;
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::{Error, Result};

/// Supported image file extensions (lowercase, compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Chooses an index into a non-empty candidate list.
pub trait IndexPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks indices uniformly at random from a general purpose RNG.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = ThreadRng> {
    rng: R,
}

impl RandomPicker {
    /// Creates a picker backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self { Self { rng: rand::rng() } }
}

impl Default for RandomPicker {
    fn default() -> Self { Self::new() }
}

impl<R: Rng> RandomPicker<R> {
    /// Creates a picker backed by the given RNG.
    pub const fn with_rng(rng: R) -> Self { Self { rng } }
}

impl<R: Rng> IndexPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize { self.rng.random_range(0..len) }
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Lists all supported image files in a directory.
///
/// Only regular files are returned, as full paths, in natural sort order.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    images.sort_by(|a, b| compare(a.to_string_lossy().as_ref(), b.to_string_lossy().as_ref()));
    Ok(images)
}

/// Picks one image from `candidates`, or `None` when there are none.
///
/// An out-of-range index from `picker` wraps around, so a non-empty list
/// always yields an image.
pub fn choose<'a, P>(candidates: &'a [PathBuf], picker: &mut P) -> Option<&'a PathBuf>
where P: IndexPicker + ?Sized {
    let len = candidates.len();
    if len == 0 {
        return None;
    }

    let index = picker.pick(len);
    if index >= len {
        tracing::warn!("wallpaper: picker returned index {index} for {len} candidate(s)");
    }

    candidates.get(index % len)
}

/// Lists the images in `dir` and picks one of them.
///
/// # Errors
///
/// Returns [`Error::NoImages`] if the folder holds no supported image, or an
/// IO error if it cannot be read.
pub fn select_image<P>(dir: &Path, picker: &mut P) -> Result<PathBuf>
where P: IndexPicker + ?Sized {
    let candidates = list_images(dir)?;
    tracing::debug!(
        "wallpaper: found {} candidate image(s) in {}",
        candidates.len(),
        dir.display()
    );

    choose(&candidates, picker).cloned().ok_or_else(|| Error::NoImages(dir.to_path_buf()))
}
