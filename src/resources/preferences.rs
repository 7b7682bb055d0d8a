//! Persistent player preferences.
//!
//! A tiny key/value store of floats backed by an INI file. Every write goes
//! straight to disk so a setting survives a crash right after it changed.
//!
//! # File Format
//!
//! ```ini
//! [audio]
//! music_volume = 0.7
//! effects_volume = 0.35
//! ```

use configparser::ini::Ini;
use log::{debug, warn};
use std::path::{Path, PathBuf};

const SECTION: &str = "audio";

/// Key of the persisted music volume.
pub const MUSIC_VOLUME_KEY: &str = "music_volume";
/// Key of the persisted effects volume.
pub const EFFECTS_VOLUME_KEY: &str = "effects_volume";

/// Float preference table with an optional backing file.
#[derive(Debug, Clone)]
pub struct Preferences {
    table: Ini,
    path: Option<PathBuf>,
}

impl Preferences {
    /// Store that lives only in memory. Nothing is written anywhere.
    pub fn in_memory() -> Self {
        Self {
            table: Ini::new(),
            path: None,
        }
    }

    /// Open the store at `path`.
    ///
    /// A missing file is not an error: the store starts empty and the file is
    /// created on the first write. An unreadable file is logged and ignored.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut table = Ini::new();
        if path.exists() {
            if let Err(e) = table.load(&path) {
                warn!("Preferences file {:?} unreadable, using defaults: {}", path, e);
                table = Ini::new();
            } else {
                debug!("Loaded preferences from {:?}", path);
            }
        }
        Self {
            table,
            path: Some(path),
        }
    }

    /// Delete the backing file at `path`, if any.
    pub fn clear(path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(path)
            .map_err(|e| format!("Failed to remove preferences file {:?}: {}", path, e))
    }

    /// Path of the backing file, if the store is persistent.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read `key`, falling back to `default` when absent or not a number.
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.table.getfloat(SECTION, key) {
            Ok(Some(v)) => v as f32,
            Ok(None) => default,
            Err(e) => {
                warn!("Preference '{}' is not a number ({}), using {}", key, e, default);
                default
            }
        }
    }

    /// Store `value` under `key` and write the file immediately.
    ///
    /// The in-memory value is updated even when the write fails.
    pub fn set_float(&mut self, key: &str, value: f32) -> Result<(), String> {
        self.table.set(SECTION, key, Some(value.to_string()));
        self.flush()
    }

    fn flush(&self) -> Result<(), String> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        self.table
            .write(path)
            .map_err(|e| format!("Failed to save preferences to {:?}: {}", path, e))
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_returns_default() {
        let prefs = Preferences::in_memory();
        assert_eq!(prefs.get_float(MUSIC_VOLUME_KEY, 0.7), 0.7);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ini");

        let mut prefs = Preferences::open(&path);
        prefs.set_float(MUSIC_VOLUME_KEY, 0.25).unwrap();
        prefs.set_float(EFFECTS_VOLUME_KEY, 0.5).unwrap();

        let reopened = Preferences::open(&path);
        assert_eq!(reopened.get_float(MUSIC_VOLUME_KEY, 0.7), 0.25);
        assert_eq!(reopened.get_float(EFFECTS_VOLUME_KEY, 0.7), 0.5);
    }

    #[test]
    fn each_write_hits_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ini");

        let mut prefs = Preferences::open(&path);
        assert!(!path.exists());
        prefs.set_float(MUSIC_VOLUME_KEY, 0.1).unwrap();
        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("music_volume"));
    }

    #[test]
    fn garbage_value_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ini");
        std::fs::write(&path, "[audio]\nmusic_volume = loud\n").unwrap();

        let prefs = Preferences::open(&path);
        assert_eq!(prefs.get_float(MUSIC_VOLUME_KEY, 0.7), 0.7);
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ini");
        let mut prefs = Preferences::open(&path);
        prefs.set_float(EFFECTS_VOLUME_KEY, 0.3).unwrap();

        Preferences::clear(&path).unwrap();
        assert!(!path.exists());
        Preferences::clear(&path).unwrap();
    }
}
