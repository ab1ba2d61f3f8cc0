//! Persisted audio settings.
//!
//! Two keys stored as TOML: `audio_enabled` (bool) and `volume` (0-100).
//! A missing file yields defaults; an out-of-range volume is clamped on load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::consts::{DEFAULT_VOLUME, MAX_VOLUME};

/// Settings store errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("Settings I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML.
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Serializing the settings failed.
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),
}

/// User audio settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether cues are audible.
    #[serde(default = "default_audio_enabled")]
    pub audio_enabled: bool,
    /// Master volume, 0-100.
    #[serde(default = "default_volume")]
    pub volume: u8,
}

fn default_audio_enabled() -> bool {
    true
}

fn default_volume() -> u8 {
    DEFAULT_VOLUME
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: default_audio_enabled(),
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Settings {
    /// Copy with the volume clamped to `MAX_VOLUME`.
    pub fn clamped(self) -> Self {
        Self {
            volume: self.volume.min(MAX_VOLUME),
            ..self
        }
    }

    /// Volume as a gain in `0.0..=1.0`, zero when muted.
    pub fn gain(&self) -> f32 {
        if self.audio_enabled {
            f32::from(self.volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME)
        } else {
            0.0
        }
    }
}

/// File-backed settings store.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is missing.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        debug!("Loading settings from {:?}", self.path);

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Settings file does not exist, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let settings: Settings =
            toml::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        if settings.volume > MAX_VOLUME {
            warn!(
                "Stored volume {} exceeds {}, clamping",
                settings.volume, MAX_VOLUME
            );
        }
        Ok(settings.clamped())
    }

    /// Persist settings, creating parent directories if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = toml::to_string(&settings.clamped())
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;
        fs::write(&self.path, text).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Saved settings (audio_enabled={}, volume={}) to {:?}",
            settings.audio_enabled, settings.volume, self.path
        );
        Ok(())
    }
}
