//! Environment variables that configure the wallpaper folders.

/// Environment variable names.
pub mod keys {
    /// Folder used when exactly one display is connected.
    pub const SINGLE_DISPLAY_FOLDER: &str = "SINGLE_DISPLAY_FOLDER";
    /// Folder used when two or more displays are connected.
    pub const MULTI_DISPLAY_FOLDER: &str = "MULTI_DISPLAY_FOLDER";
}

/// Reads a variable from the process environment.
///
/// Unset and non-UTF-8 values are both treated as absent.
#[must_use]
pub fn var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            tracing::warn!("config: ignoring {key}, value is not valid UTF-8");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_documented_names() {
        assert_eq!(keys::SINGLE_DISPLAY_FOLDER, "SINGLE_DISPLAY_FOLDER");
        assert_eq!(keys::MULTI_DISPLAY_FOLDER, "MULTI_DISPLAY_FOLDER");
    }

    #[test]
    fn test_var_missing() {
        assert!(var("DESKPAPER_TEST_SURELY_UNSET_VARIABLE").is_none());
    }
}
