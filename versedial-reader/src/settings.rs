//! Persisted user settings
//!
//! A small TOML file under the platform config directory. Absent or
//! unreadable files fall back to defaults; saving creates the directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::resolver::SourceMode;

/// User settings surviving across sessions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_mode: SourceMode,
    /// Whether the first-run tutorial has already been shown
    pub tutorial_shown: bool,
}

impl Settings {
    /// Default settings file location: `<config dir>/versedial/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("versedial").join("settings.toml"))
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "settings file invalid, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("settings serialization: {e}")))?;
        std::fs::write(path, raw)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.source_mode, SourceMode::Online);
        assert!(!settings.tutorial_shown);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            source_mode: SourceMode::Local,
            tutorial_shown: true,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "tutorial_shown = true\n").unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.source_mode, SourceMode::Online);
        assert!(settings.tutorial_shown);
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "source_mode = 42\n").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
