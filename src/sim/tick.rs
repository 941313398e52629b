//! Per-frame simulation step
//!
//! Advances every live entity by one frame. All motion is multiplied by the
//! frame scale, so a 30 Hz and a 144 Hz host move words at the same speed.

use super::collision::{projectile_hit, word_escaped};
use super::explosion::explode;
use super::state::{ExplosionFragment, FallingWord, GamePhase, GameState};
use crate::platform::GlyphMetrics;
use crate::settings::Settings;

/// Outcome of a single step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Projectiles that reached their targets this frame
    pub hits: u32,
    /// Set on the frame a word escaped the field
    pub lost_word: Option<String>,
}

#[inline]
fn fall(word: &mut FallingWord, speed: f32, scale: f32) {
    word.pos.y += speed * scale;
}

/// Move a fragment and fade it. Returns false once it has fully faded.
#[inline]
fn step_fragment(fragment: &mut ExplosionFragment, scale: f32) -> bool {
    fragment.pos += fragment.vel * scale;
    fragment.vel.y += fragment.gravity * scale;
    fragment.opacity = (fragment.opacity - fragment.decay * scale).max(0.0);
    fragment.opacity > 0.0
}

/// Advance the game state by one frame of `scale` target frames
pub fn tick<M>(state: &mut GameState, settings: &Settings, metrics: &M, scale: f32) -> TickEvents
where
    M: GlyphMetrics + ?Sized,
{
    let mut events = TickEvents::default();
    if !state.is_running() {
        return events;
    }
    let scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
    state.frames += 1;

    // 1. Words fall; the first one past the bottom ends the game
    for word in &mut state.words {
        fall(word, settings.word_fall_speed, scale);
        if events.lost_word.is_none() && word_escaped(word, &state.field) {
            events.lost_word = Some(word.text().to_string());
        }
    }

    // 2 + 3. Targets keep falling, projectiles climb, hits explode
    let fragments = &mut state.fragments;
    let rng = &mut state.rng;
    state.projectiles.retain_mut(|projectile| {
        fall(&mut projectile.target, settings.word_fall_speed, scale);
        projectile.pos.y -= settings.projectile_speed * scale;
        if projectile_hit(projectile) {
            events.hits += 1;
            explode(&projectile.target, metrics, settings, rng, fragments);
            false
        } else {
            true
        }
    });

    // 4. Fragments drift and fade out
    state.fragments.retain_mut(|f| step_fragment(f, scale));

    if let Some(word) = &events.lost_word {
        log::warn!("Game over: '{}' reached the bottom", word);
        state.phase = GamePhase::GameOver { word: word.clone() };
    }

    events
}
