//! Typefall - a falling-words typing game
//!
//! Core modules:
//! - `sim`: Frame-rate independent simulation (words, projectiles, explosions)
//! - `renderer`: Turns live entities into draw calls on a render sink
//! - `platform`: External collaborators (glyph metrics, word source, render sink)
//! - `settings`: Data-driven gameplay tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ExplosionStyle, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Frame rate all per-frame speeds are expressed against
    pub const TARGET_FPS: f64 = 60.0;

    /// Word fall speed (pixels per target frame)
    pub const WORD_FALL_SPEED: f32 = 0.5;
    /// Projectile climb speed (pixels per target frame), far above fall speed
    pub const PROJECTILE_SPEED: f32 = 75.0;
    /// Projectile render radius
    pub const PROJECTILE_RADIUS: f32 = 10.0;

    /// Milliseconds between word spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Opacity lost per target frame by an explosion fragment
    pub const FRAGMENT_DECAY: f32 = 0.015;
    /// Downward acceleration of glyph fragments (pixels per frame²)
    pub const FRAGMENT_GRAVITY: f32 = 0.08;
    /// Horizontal fan-out factor for glyph fragments
    pub const FRAGMENT_SPREAD_X: f32 = 1.5;
    /// Vertical launch factor for glyph fragments
    pub const FRAGMENT_LIFT_Y: f32 = 2.0;
    /// Bounded random jitter added to each fragment velocity component
    pub const FRAGMENT_JITTER: f32 = 0.5;

    /// Round fragments per burst explosion
    pub const BURST_FRAGMENTS: usize = 151;
    /// Upper bound (exclusive) of burst fragment radius
    pub const BURST_MAX_RADIUS: f32 = 3.0;
    /// Opacity lost per target frame by a burst fragment
    pub const BURST_DECAY: f32 = 0.01;

    /// A frame gap longer than this is a stall (e.g. a backgrounded tab) and
    /// counts as a single target frame
    pub const STALL_THRESHOLD_MS: f64 = 250.0;
}
