//! Component defaults and their persistence.
//!
//! Settings are stored as JSON in the user's config directory
//! (`~/.config/daisy-atoms/settings.json` or the platform equivalent) and
//! supply the values used when a props record leaves an option unset.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::components::avatar::{
    AvatarShape, AvatarSize, DEFAULT_AVATAR_ALT, DEFAULT_AVATAR_SRC, DEFAULT_RING_COLOR,
};
use crate::ui::components::icon::{Grade, IconSize, IconVariant, IconWeight, OpticalSize};
use crate::ui::theme::ThemeColor;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Defaults for the avatar component.
    pub avatar: AvatarDefaults,
    /// Defaults for the icon component.
    pub icon: IconDefaults,
}

impl Settings {
    /// Default settings file location.
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("io", "daisy-atoms", "daisy-atoms")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

/// Avatar defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarDefaults {
    /// Image shown when no source is given.
    pub src: String,
    /// Alt text used when none is given.
    pub alt: String,
    pub size: AvatarSize,
    pub shape: AvatarShape,
    /// Ring color class.
    pub ring_color: String,
}

impl Default for AvatarDefaults {
    fn default() -> Self {
        Self {
            src: DEFAULT_AVATAR_SRC.to_string(),
            alt: DEFAULT_AVATAR_ALT.to_string(),
            size: AvatarSize::default(),
            shape: AvatarShape::default(),
            ring_color: DEFAULT_RING_COLOR.to_string(),
        }
    }
}

/// Icon defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconDefaults {
    pub size: IconSize,
    pub variant: IconVariant,
    /// Theme color; unset means inherit.
    pub color: Option<ThemeColor>,
    pub weight: IconWeight,
    pub fill: bool,
    pub optical_size: OpticalSize,
    pub grade: Grade,
}
