//! Error types for Deskpaper.
//!
//! Every stage of a wallpaper run reports its failures through the single
//! [`Error`] enum. Failures are handled where they are detected; the runner
//! turns them into an aborted or failed outcome instead of propagating them.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a wallpaper run.
#[derive(Debug, Error)]
pub enum Error {
    /// The folder for the detected display setup was not configured.
    #[error("Configuration error: folder for {setup} setup is not set")]
    FolderUnset { setup: &'static str },

    /// The configured folder does not exist.
    #[error("Configuration error: folder does not exist: {}", .0.display())]
    FolderMissing(PathBuf),

    /// The configured path exists but is not a directory.
    #[error("Configuration error: not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No displays were detected, or detection itself failed.
    #[error("No displays detected{}", reason_suffix(.0.as_deref()))]
    NoDisplays(Option<String>),

    /// The folder contains no file with a recognized image extension.
    #[error("No image files found in the folder: {}", .0.display())]
    NoImages(PathBuf),

    /// The wallpaper command ran but exited unsuccessfully.
    #[error("Error changing wallpaper: {status}")]
    Apply {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    /// The wallpaper command could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO errors while reading a folder.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn reason_suffix(reason: Option<&str>) -> String {
    reason.map(|r| format!(" ({r})")).unwrap_or_default()
}

impl Error {
    /// Returns `true` for failures caused by a missing or invalid folder.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::FolderUnset { .. } | Self::FolderMissing(_) | Self::NotADirectory(_)
        )
    }

    /// Returns the captured output of a failed wallpaper command, if any.
    #[must_use]
    pub fn command_output(&self) -> Option<(&str, &str)> {
        match self {
            Self::Apply { stdout, stderr, .. } => Some((stdout.as_str(), stderr.as_str())),
            _ => None,
        }
    }
}
