//! Location of the persisted roster state.
//!
//! Defaults to the platform data directory:
//! - macOS: ~/Library/Application Support/org.roster.Roster/
//! - Windows: %APPDATA%/roster/Roster/data/
//! - Linux: ~/.local/share/roster/

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "roster";
const APP_NAME: &str = "Roster";

/// Platform data directory, or `None` when no home directory is known.
pub fn default_state_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

/// An explicit directory wins over the platform default.
pub fn resolve_state_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(default_state_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let explicit = PathBuf::from("/tmp/roster-state");
        assert_eq!(resolve_state_dir(Some(explicit.clone())), Some(explicit));
    }
}
