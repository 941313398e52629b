//! Word spawning
//!
//! A timer driven by frame time decides when, `spawn_word` decides where.

use glam::Vec2;
use rand::Rng;

use super::state::{FallingWord, GameState};
use crate::platform::{GlyphMetrics, WordSource};

/// Fires once per interval of accumulated frame time
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Add frame time; true when a word is due. At most one spawn per call,
    /// so a long frame cannot release a burst of words.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if self.interval_ms.is_nan() || self.interval_ms <= 0.0 {
            return false;
        }
        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = (self.elapsed_ms - self.interval_ms).min(self.interval_ms);
            true
        } else {
            false
        }
    }

    /// Forget accumulated time
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

/// Horizontal spawn position: `rand_x` shifted left by any overflow past the
/// right edge, never left of zero
pub fn clamp_spawn_x(rand_x: f32, word_width: f32, field_width: f32) -> f32 {
    let overflow = rand_x + word_width - field_width;
    let x = if overflow > 0.0 { rand_x - overflow } else { rand_x };
    x.max(0.0)
}

/// Create one word at the top of the field and add it to the live set
pub fn spawn_word<M, W>(state: &mut GameState, metrics: &M, source: &mut W) -> u32
where
    M: GlyphMetrics + ?Sized,
    W: WordSource + ?Sized,
{
    let text = source.next_word();
    let extent = metrics.measure(&text);
    let rand_x = state.rng.random::<f32>() * state.field.width;
    let x = clamp_spawn_x(rand_x, extent.width, state.field.width);

    let id = state.next_entity_id();
    log::debug!("Spawned word {} '{}' at x={:.1}", id, text, x);
    state.words.push(FallingWord::new(id, Vec2::new(x, 0.0), text, extent));
    id
}
