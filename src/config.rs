//! Kiosk configuration.
//!
//! Defaults mirror a gallery installation: screen on from 07:00 to 19:00,
//! bright picture, conservative volume. A JSON file can override any field.

use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_wake_hour() -> u32 {
    7
}

fn default_sleep_hour() -> u32 {
    19
}

fn default_screen_brightness() -> f32 {
    0.9
}

fn default_sound_level() -> f32 {
    0.35
}

/// Tunable installation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Hour of day (0-23) the screen wakes
    #[serde(default = "default_wake_hour")]
    pub wake_hour: u32,
    /// Hour of day (0-23) the screen sleeps
    #[serde(default = "default_sleep_hour")]
    pub sleep_hour: u32,
    /// Brightness applied while awake, 0.0-1.0
    #[serde(default = "default_screen_brightness")]
    pub screen_brightness: f32,
    /// Volume applied while a headset is present, 0.0-1.0
    #[serde(default = "default_sound_level")]
    pub sound_level: f32,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            wake_hour: default_wake_hour(),
            sleep_hour: default_sleep_hour(),
            screen_brightness: default_screen_brightness(),
            sound_level: default_sound_level(),
        }
    }
}

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl KioskConfig {
    /// Load a config from a JSON file; absent fields keep their defaults
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
