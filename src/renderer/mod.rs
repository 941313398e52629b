//! Frame drawing
//!
//! Translates live entities into [`RenderSink`] calls. The sink owns fonts,
//! colors and the actual surface.

use glam::Vec2;

use crate::consts::PROJECTILE_RADIUS;
use crate::platform::{GlyphMetrics, Paint, RenderSink};
use crate::sim::state::{Entity, FallingWord, FragmentPayload, GameState};

/// Draw a word glyph by glyph, highlighting the matched prefix
pub fn draw_word<M, S>(word: &FallingWord, metrics: &M, sink: &mut S)
where
    M: GlyphMetrics + ?Sized,
    S: RenderSink + ?Sized,
{
    let matched = word.matched_chars();
    let mut offset = 0.0;
    let mut buf = [0u8; 4];
    for (i, c) in word.text().chars().enumerate() {
        let paint = if i < matched { Paint::Matched } else { Paint::Text };
        let glyph = c.encode_utf8(&mut buf);
        sink.fill_text(glyph, word.pos + Vec2::new(offset, 0.0), paint, 1.0);
        offset += metrics.char_width(c);
    }
}

/// Draw every live entity, bottom layer first
pub fn draw_frame<M, S>(state: &GameState, metrics: &M, sink: &mut S)
where
    M: GlyphMetrics + ?Sized,
    S: RenderSink + ?Sized,
{
    sink.clear(state.field.width, state.field.height);

    let mut buf = [0u8; 4];
    for entity in state.entities() {
        let pos = entity.pos();
        match entity {
            Entity::Word(word) => draw_word(word, metrics, sink),
            // Launched from the target's left edge, drawn under its center
            Entity::Projectile(p) => {
                let center = Vec2::new(p.target.center_x(), pos.y);
                sink.fill_circle(center, PROJECTILE_RADIUS, Paint::Projectile, 1.0);
            }
            Entity::Fragment(f) => match f.payload {
                FragmentPayload::Glyph(c) => {
                    sink.fill_text(c.encode_utf8(&mut buf), pos, Paint::Fragment, f.opacity)
                }
                FragmentPayload::Radius(r) => sink.fill_circle(pos, r, Paint::Fragment, f.opacity),
            },
        }
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Text { text: String, pos: Vec2, paint: Paint, alpha: f32 },
    Circle { center: Vec2, radius: f32, paint: Paint, alpha: f32 },
}

/// Sink that records draw calls, keeping only the latest frame
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Paint)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, paint, .. } => Some((text.as_str(), *paint)),
            _ => None,
        })
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl RenderSink for CommandList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, paint: Paint, alpha: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            paint,
            alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint,
            alpha,
        });
    }
}
