//! Panel configuration persistence
//!
//! Stores tuning in `~/.config/sidepanel/config.yaml`. Every field has a
//! default, so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PanelError;
use crate::geometry::SwipeAxis;

/// Default animation duration for releases and explicit moves, in seconds
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.25;

/// Release heuristics for the swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureThresholds {
    /// Velocity (points/sec on the active axis) above which a release counts as a flick
    #[serde(default = "default_fast_flick_velocity")]
    pub fast_flick_velocity: f64,
    /// Offset below which a slow closing release dismisses
    #[serde(default = "default_dismiss_offset")]
    pub dismiss_offset: f64,
    /// Offset below which a fast closing flick dismisses
    #[serde(default = "default_fast_dismiss_offset")]
    pub fast_dismiss_offset: f64,
    /// Offset above which an opening (or stationary) release presents
    #[serde(default = "default_present_offset")]
    pub present_offset: f64,
}

fn default_fast_flick_velocity() -> f64 {
    1000.0
}

fn default_dismiss_offset() -> f64 {
    0.6
}

fn default_fast_dismiss_offset() -> f64 {
    0.9
}

fn default_present_offset() -> f64 {
    0.25
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            fast_flick_velocity: default_fast_flick_velocity(),
            dismiss_offset: default_dismiss_offset(),
            fast_dismiss_offset: default_fast_dismiss_offset(),
            present_offset: default_present_offset(),
        }
    }
}

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Axis the swipe gesture tracks
    #[serde(default)]
    pub swipe_axis: SwipeAxis,

    /// Duration used by releases, taps and present/dismiss, in seconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration: f64,

    /// Install the swipe recognizer when the panel is created
    #[serde(default)]
    pub swipe_enabled: bool,

    /// Install the tap-to-dismiss recognizer when the panel is created
    #[serde(default)]
    pub dismiss_enabled: bool,

    #[serde(default)]
    pub thresholds: GestureThresholds,
}

fn default_animation_duration() -> f64 {
    DEFAULT_ANIMATION_DURATION
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            swipe_axis: SwipeAxis::default(),
            animation_duration: default_animation_duration(),
            swipe_enabled: false,
            dismiss_enabled: false,
            thresholds: GestureThresholds::default(),
        }
    }
}

impl PanelConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, PanelError> {
        let content = std::fs::read_to_string(path).map_err(|source| PanelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| PanelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Save config to the given path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), PanelError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PanelError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self)?;

        std::fs::write(path, content).map_err(|source| PanelError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
