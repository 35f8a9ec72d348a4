//! Startup configuration
//!
//! Read once from a JSON file when the host starts. Screen dimensions never
//! change after the game state is built from these settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming a settings file
pub const SETTINGS_ENV_VAR: &str = "ASTEROIDS_SETTINGS";

/// Host and game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Playfield width in units
    pub screen_width: u32,
    /// Playfield height in units
    pub screen_height: u32,

    // === Game ===
    /// Fixed RNG seed (None = seed from OS entropy)
    pub seed: Option<u64>,
    /// Asteroids present when a new game starts
    pub initial_asteroids: usize,

    // === Host loop ===
    /// Frames per second
    pub frame_rate: u32,
    /// Frames to run before the headless host exits (0 = run forever)
    pub max_frames: u64,
    /// Let the built-in autopilot drive the ship
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            seed: None,
            initial_asteroids: DEFAULT_INITIAL_ASTEROIDS,
            frame_rate: 60,
            max_frames: 600,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from the given path, or from `ASTEROIDS_SETTINGS` if set
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            return Self::load_from(path);
        }
        match std::env::var_os(SETTINGS_ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot run with
    pub fn validated(mut self) -> Self {
        if self.screen_width == 0 {
            log::warn!("screen_width must be positive, using {}", DEFAULT_SCREEN_WIDTH);
            self.screen_width = DEFAULT_SCREEN_WIDTH;
        }
        if self.screen_height == 0 {
            log::warn!("screen_height must be positive, using {}", DEFAULT_SCREEN_HEIGHT);
            self.screen_height = DEFAULT_SCREEN_HEIGHT;
        }
        if self.frame_rate == 0 {
            log::warn!("frame_rate must be positive, using 60");
            self.frame_rate = 60;
        }
        self
    }

    /// Wall-clock length of one frame
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}
