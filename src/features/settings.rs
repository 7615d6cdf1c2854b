//! Application settings
//!
//! Read once at startup. A missing or broken file means defaults; on first
//! run the defaults are written out so the track path can be edited.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default background track, relative to the working directory
pub const DEFAULT_TRACK: &str = "assets/music.m4a";

/// Default playback volume
pub const DEFAULT_VOLUME: f32 = 0.2;

/// Default number of floating hearts in the background
pub const DEFAULT_HEART_COUNT: usize = 25;

/// Most floating hearts a settings file may ask for
pub const MAX_HEART_COUNT: usize = 200;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Background music
    #[serde(default)]
    pub music: MusicSettings,
    /// Display and animation settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Background music settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicSettings {
    /// Audio file to loop
    #[serde(default = "default_track")]
    pub track_path: PathBuf,
    /// Volume level (0.0 to 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Start the music on "Tap to Begin"
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

fn default_track() -> PathBuf {
    PathBuf::from(DEFAULT_TRACK)
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_true() -> bool {
    true
}

fn default_heart_count() -> usize {
    DEFAULT_HEART_COUNT
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            track_path: default_track(),
            volume: DEFAULT_VOLUME,
            autoplay: true,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Hide the looping particle layers and skip idle frames
    #[serde(default)]
    pub reduced_motion: bool,
    /// Floating hearts in the background
    #[serde(default = "default_heart_count")]
    pub heart_count: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            heart_count: DEFAULT_HEART_COUNT,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "heartnote", "Heartnote")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                if let Err(e) = settings.save_to_file(&path) {
                    tracing::warn!("Failed to write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Clamp values that came from a hand-edited file
    fn sanitized(mut self) -> Self {
        if !self.music.volume.is_finite() {
            self.music.volume = DEFAULT_VOLUME;
        }
        self.music.volume = self.music.volume.clamp(0.0, 1.0);
        self.display.heart_count = self.display.heart_count.min(MAX_HEART_COUNT);
        self
    }
}

/// Errors that can occur with settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("heartnote-test-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.music.track_path, PathBuf::from(DEFAULT_TRACK));
        assert_eq!(settings.music.volume, 0.2);
        assert!(settings.music.autoplay);
        assert_eq!(settings.display.heart_count, 25);
        assert!(!settings.display.reduced_motion);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.music.track_path = PathBuf::from("/music/our-song.mp3");
        settings.display.reduced_motion = true;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_settings_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "music": { "track_path": "song.ogg" } }"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.music.track_path, PathBuf::from("song.ogg"));
        assert_eq!(loaded.music.volume, DEFAULT_VOLUME);
        assert!(loaded.music.autoplay);
        assert_eq!(loaded.display, DisplaySettings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_volume_is_clamped() {
        let path = temp_settings_path("clamp");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{ "music": { "track_path": "song.ogg", "volume": 3.5 } }"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.music.volume, 1.0);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_heart_count_is_capped() {
        let path = temp_settings_path("hearts");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "display": { "heart_count": 4000000000 } }"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.display.heart_count, MAX_HEART_COUNT);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let path = temp_settings_path("broken");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }
}
