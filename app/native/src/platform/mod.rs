//! Platform helpers.
//!
//! - [`path`] - Shell-like expansion of configured folder paths

pub mod path;
