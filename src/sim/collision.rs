//! Collision and boundary tests
//!
//! Screen coordinates: y grows downward, the field spans `0..=height`.

use super::state::{FallingWord, Field, Projectile};

/// True once a projectile has climbed to (or past) its target's baseline
#[inline]
pub fn projectile_hit(projectile: &Projectile) -> bool {
    projectile.pos.y <= projectile.target.pos.y
}

/// True once a word's top edge has left the bottom of the field
#[inline]
pub fn word_escaped(word: &FallingWord, field: &Field) -> bool {
    word.pos.y - word.height() > field.height
}
