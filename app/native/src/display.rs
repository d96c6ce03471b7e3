//! Display detection.
//!
//! Counts the displays currently attached to the machine. Detection never
//! fails loudly: any problem with the platform query is caught and reported
//! as [`DisplayCount::DetectionFailed`] so the runner can abort cleanly.

use std::fmt;

/// Result of a display query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCount {
    /// The platform reported this many displays (possibly zero).
    Detected(usize),
    /// The platform query failed.
    DetectionFailed(String),
}

impl DisplayCount {
    /// Returns the count when at least one display was detected.
    #[must_use]
    pub const fn usable(&self) -> Option<usize> {
        match self {
            Self::Detected(count) if *count > 0 => Some(*count),
            _ => None,
        }
    }

    /// Returns the count to report to the user; failures report as zero.
    #[must_use]
    pub const fn reported(&self) -> usize {
        match self {
            Self::Detected(count) => *count,
            Self::DetectionFailed(_) => 0,
        }
    }
}

impl fmt::Display for DisplayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected(count) => write!(f, "{count}"),
            Self::DetectionFailed(reason) => write!(f, "0 (detection failed: {reason})"),
        }
    }
}

/// Something that can count the connected displays.
pub trait DisplayCounter {
    /// Queries the number of connected displays.
    fn count(&self) -> DisplayCount;
}

/// Counts displays through `NSScreen`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenCounter;

impl DisplayCounter for ScreenCounter {
    fn count(&self) -> DisplayCount {
        let result = std::panic::catch_unwind(screens::count).unwrap_or_else(|payload| {
            let reason = payload
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(ToString::to_string))
                .unwrap_or_else(|| "platform call panicked".to_string());
            Err(reason)
        });

        match result {
            Ok(count) => {
                tracing::debug!("display: NSScreen reported {count} screen(s)");
                DisplayCount::Detected(count)
            }
            Err(reason) => {
                tracing::error!("display: error retrieving display information: {reason}");
                DisplayCount::DetectionFailed(reason)
            }
        }
    }
}

#[cfg(target_os = "macos")]
mod screens {
    use objc::runtime::{Class, Object};
    use objc::{msg_send, sel, sel_impl};

    #[link(name = "AppKit", kind = "framework")]
    unsafe extern "C" {}

    /// Returns the length of `[NSScreen screens]`.
    pub fn count() -> Result<usize, String> {
        unsafe {
            let Some(screen_class) = Class::get("NSScreen") else {
                return Err("Failed to get NSScreen class".to_string());
            };

            let screens: *mut Object = msg_send![screen_class, screens];
            if screens.is_null() {
                return Err("Failed to get screens".to_string());
            }

            let count: usize = msg_send![screens, count];
            Ok(count)
        }
    }
}

#[cfg(not(target_os = "macos"))]
mod screens {
    pub fn count() -> Result<usize, String> {
        Err("display enumeration requires macOS".to_string())
    }
}
