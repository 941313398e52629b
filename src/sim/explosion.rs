//! Explosion fragments for destroyed words

use glam::Vec2;
use rand::Rng;

use super::state::{ExplosionFragment, FallingWord, FragmentPayload};
use crate::platform::GlyphMetrics;
use crate::settings::{ExplosionStyle, Settings};

/// Shape of the glyph fan-out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSpread {
    pub spread_x: f32,
    pub lift_y: f32,
    pub jitter: f32,
    pub decay: f32,
    pub gravity: f32,
}

impl GlyphSpread {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            spread_x: settings.fragment_spread_x,
            lift_y: settings.fragment_lift_y,
            jitter: settings.fragment_jitter,
            decay: settings.fragment_decay,
            gravity: settings.fragment_gravity,
        }
    }
}

/// Size and lifetime of a round burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpread {
    pub count: usize,
    pub max_radius: f32,
    pub decay: f32,
}

impl BurstSpread {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            count: settings.burst_fragments,
            max_radius: settings.burst_max_radius,
            decay: settings.burst_decay,
        }
    }
}

/// Uniform jitter in `[-amount, amount)`
fn jitter(rng: &mut impl Rng, amount: f32) -> f32 {
    (rng.random::<f32>() * 2.0 - 1.0) * amount
}

/// One fragment per character, fanning out from the word's center.
///
/// Characters left of center fly left and those right of it fly right, faster
/// the further out they sit. Center characters are launched highest.
pub fn explode_glyphs<M>(
    word: &FallingWord,
    metrics: &M,
    spread: &GlyphSpread,
    rng: &mut impl Rng,
    out: &mut Vec<ExplosionFragment>,
) where
    M: GlyphMetrics + ?Sized,
{
    let n = word.text().chars().count();
    if n == 0 {
        return;
    }
    out.reserve(n);

    let center = (n as f32 - 1.0) / 2.0;
    let mut offset = 0.0;
    for (i, c) in word.text().chars().enumerate() {
        let d = i as f32 - center;
        let dx = (d + jitter(rng, spread.jitter)) * spread.spread_x;
        // Upward is negative y; lift shrinks with distance from center
        let lift = (center - d.abs() + 1.0).max(0.0);
        let dy = -(lift + jitter(rng, spread.jitter).abs()) * spread.lift_y;

        out.push(ExplosionFragment {
            pos: word.pos + Vec2::new(offset, 0.0),
            vel: Vec2::new(dx, dy),
            payload: FragmentPayload::Glyph(c),
            opacity: 1.0,
            decay: spread.decay,
            gravity: spread.gravity,
        });
        offset += metrics.char_width(c);
    }
}

/// A fixed batch of round sparks from the word's horizontal center
pub fn explode_burst(
    word: &FallingWord,
    burst: &BurstSpread,
    rng: &mut impl Rng,
    out: &mut Vec<ExplosionFragment>,
) {
    let origin = Vec2::new(word.center_x(), word.pos.y);
    out.reserve(burst.count);
    for _ in 0..burst.count {
        let dx = (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * 6.0);
        let dy = (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * 6.0);
        let radius = rng.random::<f32>() * burst.max_radius;
        out.push(ExplosionFragment {
            pos: origin,
            vel: Vec2::new(dx, dy),
            payload: FragmentPayload::Radius(radius),
            opacity: 1.0,
            decay: burst.decay,
            gravity: 0.0,
        });
    }
}

/// Destroy `word` in the configured style, appending fragments to `out`
pub fn explode<M>(
    word: &FallingWord,
    metrics: &M,
    settings: &Settings,
    rng: &mut impl Rng,
    out: &mut Vec<ExplosionFragment>,
) where
    M: GlyphMetrics + ?Sized,
{
    let before = out.len();
    match settings.explosion_style {
        ExplosionStyle::Glyphs => {
            explode_glyphs(word, metrics, &GlyphSpread::from_settings(settings), rng, out)
        }
        ExplosionStyle::Burst => {
            explode_burst(word, &BurstSpread::from_settings(settings), rng, out)
        }
    }
    log::debug!(
        "Word '{}' exploded into {} fragments",
        word.text(),
        out.len() - before
    );
}
