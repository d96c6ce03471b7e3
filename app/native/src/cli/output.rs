//! CLI output formatting.
//!
//! Run messages go to standard output, colored by kind. `colored` turns the
//! colors off on its own when `NO_COLOR` is set or output is not a terminal.

use colored::{ColoredString, Colorize};

use crate::wallpaper::{Level, Reporter};

/// Prints run messages to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, level: Level, message: &str) { println!("{}", styled(level, message)); }
}

/// Applies the color used for `level`.
#[must_use]
pub fn styled(level: Level, message: &str) -> ColoredString {
    match level {
        Level::Info => message.normal(),
        Level::Success => message.green(),
        Level::Error => message.red().bold(),
        Level::Detail => message.dimmed(),
    }
}
