//! Platform abstraction layer
//!
//! The simulation never talks to a window, canvas or font directly. Hosts
//! supply these collaborators:
//! - Glyph metrics (text measurement)
//! - Word source
//! - Render sink (draw calls)
//!
//! Visibility and input are plain arguments to [`crate::sim::Game`].

pub mod metrics;
pub mod words;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use metrics::MonospaceMetrics;
pub use words::WordList;

/// Measured extent of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f32,
    /// Ascent + descent
    pub height: f32,
}

/// Text measurement service for a fixed font
pub trait GlyphMetrics {
    fn measure(&self, text: &str) -> TextMetrics;

    /// Width of a single character
    fn char_width(&self, c: char) -> f32 {
        let mut buf = [0u8; 4];
        self.measure(c.encode_utf8(&mut buf)).width
    }
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn measure(&self, text: &str) -> TextMetrics {
        (**self).measure(text)
    }

    fn char_width(&self, c: char) -> f32 {
        (**self).char_width(c)
    }
}

/// Supplies the text of newly spawned words. Always succeeds.
pub trait WordSource {
    fn next_word(&mut self) -> String;
}

impl<F: FnMut() -> String> WordSource for F {
    fn next_word(&mut self) -> String {
        self()
    }
}

/// Paint roles; the host maps them to concrete colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paint {
    /// Characters not (yet) confirmed by input
    Text,
    /// Characters confirmed by the matched prefix
    Matched,
    Projectile,
    Fragment,
}

/// Receives draw calls for a field of known size. Never read back.
pub trait RenderSink {
    /// Start a new frame
    fn clear(&mut self, width: f32, height: f32);

    /// Draw text with its baseline-left at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, paint: Paint, alpha: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, alpha: f32);
}
