//! Game state and core simulation types
//!
//! Entities are plain data. Behavior lives in the sibling modules.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::platform::TextMetrics;

/// Current phase of gameplay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// A word reached the bottom of the field
    GameOver { word: String },
}

/// The visible play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A word descending the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingWord {
    pub id: u32,
    pub pos: Vec2,
    text: String,
    width: f32,
    height: f32,
    /// Input currently confirmed against this word; always a prefix of `text`
    matched: Option<String>,
}

impl FallingWord {
    pub fn new(id: u32, pos: Vec2, text: impl Into<String>, metrics: TextMetrics) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            width: metrics.width,
            height: metrics.height,
            matched: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn matched(&self) -> Option<&str> {
        self.matched.as_deref()
    }

    /// Mark `input` as the confirmed prefix, or clear the mark if it isn't one.
    /// Empty input always clears.
    pub fn set_matched(&mut self, input: &str) {
        if !input.is_empty() && self.text.starts_with(input) {
            match &mut self.matched {
                Some(m) => {
                    m.clear();
                    m.push_str(input);
                }
                None => self.matched = Some(input.to_string()),
            }
        } else {
            self.matched = None;
        }
    }

    /// Number of leading characters to highlight
    pub fn matched_chars(&self) -> usize {
        self.matched.as_deref().map_or(0, |m| m.chars().count())
    }

    /// Horizontal center of the rendered text
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A projectile climbing toward the word it was fired at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// The word left the live set when it was matched and keeps falling here
    pub target: FallingWord,
}

/// What an explosion fragment looks like
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FragmentPayload {
    Glyph(char),
    Radius(f32),
}

/// A piece of a destroyed word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionFragment {
    pub pos: Vec2,
    pub vel: Vec2,
    pub payload: FragmentPayload,
    /// 1 on creation, only decreases; removed at 0
    pub opacity: f32,
    /// Opacity lost per target frame
    pub decay: f32,
    /// Added to `vel.y` per target frame
    pub gravity: f32,
}

/// Borrowed view over any live entity
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Word(&'a FallingWord),
    Projectile(&'a Projectile),
    Fragment(&'a ExplosionFragment),
}

impl Entity<'_> {
    pub fn pos(&self) -> Vec2 {
        match self {
            Entity::Word(w) => w.pos,
            Entity::Projectile(p) => p.pos,
            Entity::Fragment(f) => f.pos,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub phase: GamePhase,
    /// Text currently in the player's input surface
    pub input: String,
    /// Live words, oldest first
    pub words: Vec<FallingWord>,
    pub projectiles: Vec<Projectile>,
    #[serde(skip)]
    pub fragments: Vec<ExplosionFragment>,
    /// Frames stepped so far
    pub frames: u64,
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    next_id: u32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            field,
            phase: GamePhase::Running,
            input: String::new(),
            words: Vec::new(),
            projectiles: Vec::new(),
            fragments: Vec::new(),
            frames: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Iterate every live entity: words, then projectiles with their targets, then fragments
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.words
            .iter()
            .map(Entity::Word)
            .chain(
                self.projectiles
                    .iter()
                    .flat_map(|p| [Entity::Projectile(p), Entity::Word(&p.target)]),
            )
            .chain(self.fragments.iter().map(Entity::Fragment))
    }

    pub fn word(&self, id: u32) -> Option<&FallingWord> {
        self.words.iter().find(|w| w.id == id)
    }
}
