//! Simulation module
//!
//! All gameplay logic lives here:
//! - Per-frame motion scaled by elapsed time, never a flat per-frame step
//! - Seeded RNG only
//! - Live sets filtered in place, never shrunk mid-iteration
//! - No rendering or platform dependencies beyond the `platform` traits

pub mod clock;
pub mod collision;
pub mod driver;
pub mod explosion;
pub mod matcher;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{FrameClock, FrameTime};
pub use collision::{projectile_hit, word_escaped};
pub use driver::{FrameStatus, Game};
pub use explosion::{BurstSpread, GlyphSpread, explode, explode_burst, explode_glyphs};
pub use matcher::{MatchOutcome, apply_input};
pub use spawn::{SpawnTimer, clamp_spawn_x, spawn_word};
pub use state::{
    Entity, ExplosionFragment, FallingWord, Field, FragmentPayload, GamePhase, GameState,
    Projectile,
};
pub use tick::{TickEvents, tick};
