//! Configuration and settings management.
//!
//! This module provides the component defaults and their persistence.
//! Settings are stored in the user's config directory as JSON.

mod settings;

pub use settings::{AvatarDefaults, IconDefaults, Settings, SettingsError, SETTINGS_FILE};
