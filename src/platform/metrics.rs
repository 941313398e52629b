//! Fixed-advance glyph metrics for headless runs

use super::{GlyphMetrics, TextMetrics};

/// Every character has the same advance width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    /// Roughly a 48px font
    fn default() -> Self {
        Self::new(27.0, 35.0)
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> TextMetrics {
        let chars = text.chars().count();
        TextMetrics {
            width: chars as f32 * self.advance,
            height: if chars == 0 { 0.0 } else { self.line_height },
        }
    }

    fn char_width(&self, _c: char) -> f32 {
        self.advance
    }
}
