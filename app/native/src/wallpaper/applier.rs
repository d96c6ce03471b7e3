//! macOS wallpaper application.
//!
//! Asks System Events (through `osascript`) to set the picture of every
//! desktop, which covers all spaces on all displays.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Program used to run AppleScript.
pub const OSASCRIPT: &str = "osascript";

/// Output captured from a wallpaper command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Applies an image as the desktop wallpaper.
pub trait WallpaperSetter {
    /// Sets `image` as the picture of every desktop.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallpaper could not be changed.
    fn apply(&self, image: &Path) -> Result<CommandOutput>;
}

/// Sets the wallpaper by running an AppleScript through `osascript`.
#[derive(Debug, Clone)]
pub struct OsaScriptSetter {
    program: String,
}

impl Default for OsaScriptSetter {
    fn default() -> Self { Self::new() }
}

impl OsaScriptSetter {
    /// Creates a setter that runs `osascript` from `PATH`.
    #[must_use]
    pub fn new() -> Self { Self::with_program(OSASCRIPT) }

    /// Creates a setter that runs `program` instead of `osascript`.
    ///
    /// The program receives `-e <script>` as its arguments.
    pub fn with_program(program: impl Into<String>) -> Self { Self { program: program.into() } }

    /// Returns the program this setter runs.
    #[must_use]
    pub fn program(&self) -> &str { &self.program }
}

impl WallpaperSetter for OsaScriptSetter {
    fn apply(&self, image: &Path) -> Result<CommandOutput> {
        let script = desktop_picture_script(image);
        tracing::debug!("wallpaper: running {} for {}", self.program, image.display());

        let output = Command::new(&self.program)
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|source| Error::Spawn { program: self.program.clone(), source })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            Err(Error::Apply { status: output.status, stdout, stderr })
        }
    }
}

/// Builds the AppleScript that sets `image` on every desktop.
#[must_use]
pub fn desktop_picture_script(image: &Path) -> String {
    let image = escape_applescript(&image.to_string_lossy());
    format!(
        r#"tell application "System Events"
    repeat with d in desktops
        set picture of d to POSIX file "{image}"
    end repeat
end tell"#
    )
}

/// Escapes a value for use inside an AppleScript string literal.
fn escape_applescript(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
