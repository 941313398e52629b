//! Gameplay settings and tuning
//!
//! Persisted as JSON. Every field has a default so partial files load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How a destroyed word comes apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExplosionStyle {
    /// One fragment per character, fanning out from the word's center
    #[default]
    Glyphs,
    /// A fixed batch of round sparks from the word's center
    Burst,
}

impl ExplosionStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplosionStyle::Glyphs => "Glyphs",
            ExplosionStyle::Burst => "Burst",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "glyphs" | "glyph" | "chars" => Some(ExplosionStyle::Glyphs),
            "burst" | "radius" => Some(ExplosionStyle::Burst),
            _ => None,
        }
    }
}

/// Errors raised while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for spawn positions and explosion jitter
    pub seed: u64,
    /// Frame rate the per-frame speeds below are expressed against
    pub target_fps: f64,

    // === Motion ===
    pub word_fall_speed: f32,
    pub projectile_speed: f32,
    /// Frame gaps longer than this advance by one target frame only
    pub stall_threshold_ms: f64,

    // === Spawning ===
    pub spawn_interval_ms: f64,
    /// Stop the spawn timer while the surface is hidden
    pub pause_spawns_when_hidden: bool,

    // === Explosions ===
    pub explosion_style: ExplosionStyle,
    pub fragment_decay: f32,
    pub fragment_gravity: f32,
    pub fragment_spread_x: f32,
    pub fragment_lift_y: f32,
    pub fragment_jitter: f32,
    /// Sparks per word in the burst style
    pub burst_fragments: usize,
    pub burst_max_radius: f32,
    pub burst_decay: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            target_fps: TARGET_FPS,

            word_fall_speed: WORD_FALL_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            stall_threshold_ms: STALL_THRESHOLD_MS,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            pause_spawns_when_hidden: true,

            explosion_style: ExplosionStyle::Glyphs,
            fragment_decay: FRAGMENT_DECAY,
            fragment_gravity: FRAGMENT_GRAVITY,
            fragment_spread_x: FRAGMENT_SPREAD_X,
            fragment_lift_y: FRAGMENT_LIFT_Y,
            fragment_jitter: FRAGMENT_JITTER,
            burst_fragments: BURST_FRAGMENTS,
            burst_max_radius: BURST_MAX_RADIUS,
            burst_decay: BURST_DECAY,
        }
    }
}

impl Settings {
    /// Target frame interval in milliseconds
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
