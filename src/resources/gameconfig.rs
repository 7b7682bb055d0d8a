//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup. Player preferences (volumes) live in a separate file, see
//! [`crate::resources::preferences`].
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 540
//! vsync = true
//! target_fps = 120
//!
//! [gameplay]
//! player_speed = 90
//! fixed_timestep = 0.016666
//!
//! [audio]
//! preferences = ./preferences.ini
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 540;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_PLAYER_SPEED: f32 = 90.0;
const DEFAULT_FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_PREFERENCES_PATH: &str = "./preferences.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Length of one physics step in seconds.
    pub fixed_timestep: f32,
    /// Path to the player preference store.
    pub preferences_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            player_speed: DEFAULT_PLAYER_SPEED,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [gameplay] section
        if let Some(speed) = config.getfloat("gameplay", "player_speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(step) = config.getfloat("gameplay", "fixed_timestep").ok().flatten()
            && step > 0.0
        {
            self.fixed_timestep = step as f32;
        }

        // [audio] section
        if let Some(path) = config.get("audio", "preferences") {
            self.preferences_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, speed={}, step={}, prefs={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.player_speed,
            self.fixed_timestep,
            self.preferences_path
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::with_path(dir.path().join("nope.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
        assert_eq!(config.player_speed, DEFAULT_PLAYER_SPEED);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[window]\nwidth = 640\n\n[gameplay]\nplayer_speed = 120.5\nfixed_timestep = 0\n\n[audio]\npreferences = /tmp/p.ini\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.player_speed, 120.5);
        assert_eq!(config.fixed_timestep, DEFAULT_FIXED_TIMESTEP);
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/p.ini"));
    }
}
