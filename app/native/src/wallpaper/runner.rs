//! The wallpaper run: detect displays, choose a folder, pick an image, apply it.
//!
//! A run is a single linear pass. Every failure is reported where it happens
//! and ends the run with an [`Outcome`]; nothing is retried and nothing
//! escapes as a panic.

use std::path::{Path, PathBuf};

use super::applier::WallpaperSetter;
use super::folder::validate_folder;
use super::selector::{IndexPicker, select_image};
use crate::config::{Config, Setup};
use crate::display::{DisplayCount, DisplayCounter};
use crate::error::Error;

/// Kind of message emitted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress information.
    Info,
    /// The wallpaper was changed.
    Success,
    /// A stage failed.
    Error,
    /// Captured command output.
    Detail,
}

/// Receives the messages of a run.
pub trait Reporter {
    /// Handles one message.
    fn report(&mut self, level: Level, message: &str);
}

/// Reporter that keeps every message, useful for inspecting a run.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Messages in the order they were reported.
    pub messages: Vec<(Level, String)>,
}

impl Transcript {
    /// Returns `true` if any message of `level` contains `needle`.
    #[must_use]
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages.iter().any(|(l, m)| *l == level && m.contains(needle))
    }

    /// Returns the last reported message.
    #[must_use]
    pub fn last(&self) -> Option<&str> { self.messages.last().map(|(_, m)| m.as_str()) }
}

impl Reporter for Transcript {
    fn report(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The wallpaper was set to this image.
    Applied(PathBuf),
    /// The run stopped before applying anything.
    Aborted(Error),
    /// An image was chosen but applying it failed.
    ApplyFailed {
        /// The image that could not be applied.
        image: PathBuf,
        /// Why applying failed.
        error: Error,
    },
}

impl Outcome {
    /// Returns `true` if the wallpaper was changed.
    #[must_use]
    pub const fn is_applied(&self) -> bool { matches!(self, Self::Applied(_)) }

    /// Returns the image that was chosen, if the run got that far.
    #[must_use]
    pub fn image(&self) -> Option<&Path> {
        match self {
            Self::Applied(image) | Self::ApplyFailed { image, .. } => Some(image.as_path()),
            Self::Aborted(_) => None,
        }
    }

    /// Returns the error that ended the run, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Applied(_) => None,
            Self::Aborted(error) | Self::ApplyFailed { error, .. } => Some(error),
        }
    }

    /// Process exit code for this outcome: `0` only when the wallpaper changed.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_applied() { 0 } else { 1 }
    }
}

/// Runs one wallpaper change against the given collaborators.
pub struct Runner<'a> {
    config: &'a Config,
    displays: &'a dyn DisplayCounter,
    setter: &'a dyn WallpaperSetter,
}

impl<'a> Runner<'a> {
    /// Creates a runner.
    #[must_use]
    pub const fn new(
        config: &'a Config,
        displays: &'a dyn DisplayCounter,
        setter: &'a dyn WallpaperSetter,
    ) -> Self {
        Self { config, displays, setter }
    }

    /// Performs the run, reporting each stage to `reporter`.
    ///
    /// The completion message is always the last message reported.
    pub fn run(&self, picker: &mut dyn IndexPicker, reporter: &mut dyn Reporter) -> Outcome {
        reporter.report(Level::Info, "Starting wallpaper change...");

        let outcome = self.change_wallpaper(picker, reporter);

        tracing::debug!("wallpaper: run finished, applied = {}", outcome.is_applied());
        reporter.report(Level::Info, "Wallpaper change completed.");
        outcome
    }

    fn change_wallpaper(&self, picker: &mut dyn IndexPicker, reporter: &mut dyn Reporter) -> Outcome {
        let count = self.displays.count();
        reporter.report(
            Level::Info,
            &format!("Number of connected displays detected: {}", count.reported()),
        );

        let Some(setup) = count.usable().and_then(Setup::for_display_count) else {
            reporter.report(
                Level::Error,
                "Error: No displays detected or an error occurred while detecting displays.",
            );
            let reason = match count {
                DisplayCount::DetectionFailed(reason) => Some(reason),
                DisplayCount::Detected(_) => None,
            };
            return Outcome::Aborted(Error::NoDisplays(reason));
        };

        reporter.report(Level::Info, &format!("Setting wallpaper for {setup} setup."));

        let folder = match validate_folder(self.config.folder(setup), setup.label()) {
            Ok(folder) => folder,
            Err(err) => {
                reporter.report(Level::Error, &format!("Invalid wallpaper folder: {err}"));
                return Outcome::Aborted(err);
            }
        };

        let image = match select_image(folder, picker) {
            Ok(image) => image,
            Err(err @ Error::NoImages(_)) => {
                reporter.report(Level::Error, &err.to_string());
                return Outcome::Aborted(err);
            }
            Err(err) => {
                reporter.report(Level::Error, &format!("Error accessing wallpaper folder: {err}"));
                return Outcome::Aborted(err);
            }
        };

        match self.setter.apply(&image) {
            Ok(output) => {
                reporter.report(
                    Level::Success,
                    &format!("Wallpaper successfully set to: {}", image.display()),
                );
                report_output(reporter, &output.stdout, &output.stderr);
                Outcome::Applied(image)
            }
            Err(err) => {
                reporter.report(Level::Error, &err.to_string());
                if let Some((stdout, stderr)) = err.command_output() {
                    report_output(reporter, stdout, stderr);
                }
                tracing::error!("wallpaper: failed to apply {}: {err}", image.display());
                Outcome::ApplyFailed { image, error: err }
            }
        }
    }
}

fn report_output(reporter: &mut dyn Reporter, stdout: &str, stderr: &str) {
    reporter.report(Level::Detail, &format!("STDOUT: {}", stdout.trim_end()));
    reporter.report(Level::Detail, &format!("STDERR: {}", stderr.trim_end()));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::wallpaper::applier::CommandOutput;

    struct FixedCount(DisplayCount);

    impl DisplayCounter for FixedCount {
        fn count(&self) -> DisplayCount { self.0.clone() }
    }

    struct FixedIndex(usize);

    impl IndexPicker for FixedIndex {
        fn pick(&mut self, _len: usize) -> usize { self.0 }
    }

    #[derive(Default)]
    struct RecordingSetter {
        applied: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl WallpaperSetter for RecordingSetter {
        fn apply(&self, image: &Path) -> crate::error::Result<CommandOutput> {
            self.applied.borrow_mut().push(image.to_path_buf());
            if self.fail {
                return Err(Error::Spawn {
                    program: "osascript".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                });
            }
            Ok(CommandOutput::default())
        }
    }

    fn folder_with(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in files {
            fs::write(temp_dir.path().join(name), b"").unwrap();
        }
        temp_dir
    }

    fn config_for(single: Option<&Path>, multi: Option<&Path>) -> Config {
        Config {
            single_display_folder: single.map(Path::to_path_buf),
            multi_display_folder: multi.map(Path::to_path_buf),
        }
    }

    fn run(config: &Config, count: DisplayCount, setter: &RecordingSetter) -> (Outcome, Transcript) {
        let displays = FixedCount(count);
        let mut transcript = Transcript::default();
        let outcome =
            Runner::new(config, &displays, setter).run(&mut FixedIndex(0), &mut transcript);
        (outcome, transcript)
    }

    #[test]
    fn test_single_display_uses_single_folder() {
        let single = folder_with(&["x.png"]);
        let multi = folder_with(&["y.png"]);
        let config = config_for(Some(single.path()), Some(multi.path()));
        let setter = RecordingSetter::default();

        let (outcome, transcript) = run(&config, DisplayCount::Detected(1), &setter);

        assert!(outcome.is_applied());
        assert_eq!(*setter.applied.borrow(), vec![single.path().join("x.png")]);
        assert!(transcript.contains(Level::Info, "single-display"));
    }

    #[test]
    fn test_multiple_displays_use_multi_folder() {
        let single = folder_with(&["x.png"]);
        let multi = folder_with(&["y.png"]);
        let config = config_for(Some(single.path()), Some(multi.path()));
        let setter = RecordingSetter::default();

        let (outcome, _) = run(&config, DisplayCount::Detected(2), &setter);

        assert_eq!(outcome.image(), Some(multi.path().join("y.png").as_path()));
        assert_eq!(*setter.applied.borrow(), vec![multi.path().join("y.png")]);
    }

    #[test]
    fn test_zero_displays_aborts_before_touching_folders() {
        let config = config_for(Some(Path::new("/nonexistent/single")), None);
        let setter = RecordingSetter::default();

        let (outcome, transcript) = run(&config, DisplayCount::Detected(0), &setter);

        assert!(matches!(outcome, Outcome::Aborted(Error::NoDisplays(None))));
        assert!(setter.applied.borrow().is_empty());
        assert!(transcript.contains(Level::Error, "No displays detected"));
        assert!(!transcript.contains(Level::Error, "Invalid wallpaper folder"));
    }

    #[test]
    fn test_detection_failure_aborts() {
        let single = folder_with(&["x.png"]);
        let config = config_for(Some(single.path()), None);
        let setter = RecordingSetter::default();

        let (outcome, transcript) =
            run(&config, DisplayCount::DetectionFailed("no NSScreen".to_string()), &setter);

        assert!(matches!(outcome, Outcome::Aborted(Error::NoDisplays(Some(_)))));
        assert!(setter.applied.borrow().is_empty());
        assert!(transcript.contains(Level::Info, "displays detected: 0"));
    }

    #[test]
    fn test_unset_folder_aborts() {
        let config = Config::default();
        let setter = RecordingSetter::default();

        let (outcome, transcript) = run(&config, DisplayCount::Detected(1), &setter);

        assert!(matches!(outcome, Outcome::Aborted(Error::FolderUnset { setup: "single-display" })));
        assert!(setter.applied.borrow().is_empty());
        assert!(transcript.contains(Level::Error, "Invalid wallpaper folder"));
    }

    #[test]
    fn test_missing_folder_aborts() {
        let config = config_for(None, Some(Path::new("/nonexistent/deskpaper/multi")));
        let setter = RecordingSetter::default();

        let (outcome, _) = run(&config, DisplayCount::Detected(3), &setter);

        assert!(matches!(outcome, Outcome::Aborted(Error::FolderMissing(_))));
        assert!(setter.applied.borrow().is_empty());
    }

    #[test]
    fn test_folder_without_images_aborts() {
        let single = folder_with(&["notes.txt"]);
        let config = config_for(Some(single.path()), None);
        let setter = RecordingSetter::default();

        let (outcome, transcript) = run(&config, DisplayCount::Detected(1), &setter);

        assert!(matches!(outcome, Outcome::Aborted(Error::NoImages(_))));
        assert!(setter.applied.borrow().is_empty());
        assert!(transcript.contains(Level::Error, "No image files found"));
    }

    #[test]
    fn test_apply_failure_still_completes() {
        let single = folder_with(&["x.png"]);
        let config = config_for(Some(single.path()), None);
        let setter = RecordingSetter { fail: true, ..Default::default() };

        let (outcome, transcript) = run(&config, DisplayCount::Detected(1), &setter);

        assert!(matches!(outcome, Outcome::ApplyFailed { .. }));
        assert_eq!(outcome.image(), Some(single.path().join("x.png").as_path()));
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(transcript.last(), Some("Wallpaper change completed."));
    }

    #[test]
    fn test_success_message_names_image() {
        let single = folder_with(&["x.png"]);
        let config = config_for(Some(single.path()), None);
        let setter = RecordingSetter::default();

        let (outcome, transcript) = run(&config, DisplayCount::Detected(1), &setter);

        let expected = single.path().join("x.png");
        assert_eq!(outcome.exit_code(), 0);
        assert!(transcript.contains(Level::Success, &expected.display().to_string()));
        assert!(transcript.contains(Level::Detail, "STDOUT:"));
        assert_eq!(transcript.last(), Some("Wallpaper change completed."));
    }

    #[test]
    fn test_outcome_accessors() {
        let applied = Outcome::Applied(PathBuf::from("/tmp/wp1/x.png"));
        assert!(applied.error().is_none());
        assert_eq!(applied.image(), Some(Path::new("/tmp/wp1/x.png")));

        let aborted = Outcome::Aborted(Error::NoDisplays(None));
        assert!(aborted.image().is_none());
        assert!(aborted.error().is_some());
        assert_eq!(aborted.exit_code(), 1);
    }
}
