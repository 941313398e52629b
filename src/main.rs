//! Typefall entry point
//!
//! Runs a headless session at a simulated 60 Hz with an automatic typist,
//! logging what happens until a word reaches the bottom.
//!
//! Usage: `typefall [--explosion glyphs|burst] [seed] [settings.json]`

use std::env;

use typefall::{ExplosionStyle, Settings};
use typefall::platform::{MonospaceMetrics, WordList};
use typefall::renderer::CommandList;
use typefall::sim::{Field, FrameStatus, Game, GameState};

/// Field size in pixels
const FIELD_WIDTH: f32 = 1280.0;
const FIELD_HEIGHT: f32 = 720.0;
/// Give up after five simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 5;
/// Frames between auto-typist keystrokes
const KEYSTROKE_FRAMES: u32 = 9;

/// Types the lowest word on screen, one character at a time
#[derive(Default)]
struct AutoTypist {
    countdown: u32,
    target: Option<String>,
    typed: String,
}

impl AutoTypist {
    /// Next full input value, if a key is pressed this frame
    fn keystroke(&mut self, state: &GameState) -> Option<String> {
        if self.countdown > 0 {
            self.countdown -= 1;
            return None;
        }
        self.countdown = KEYSTROKE_FRAMES;

        if self.typed.is_empty() {
            self.target = state
                .words
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|w| w.text().to_string());
        }
        let target = self.target.as_deref()?;
        let next = target.get(self.typed.len()..)?.chars().next()?;
        self.typed.push(next);
        Some(self.typed.clone())
    }
}

fn main() {
    env_logger::init();

    let mut style = None;
    let mut positional = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--explosion" {
            let name = args.next().unwrap_or_default();
            style = ExplosionStyle::from_str(&name);
            if style.is_none() {
                log::warn!("Unknown explosion style '{}', keeping configured style", name);
            }
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let seed = positional.next().and_then(|s| s.parse::<u64>().ok());
    let mut settings = match positional.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(seed) = seed {
        settings.seed = seed;
    }
    if let Some(style) = style {
        settings.explosion_style = style;
    }

    log::info!(
        "Typefall (headless) starting with seed {}, {} explosions",
        settings.seed,
        settings.explosion_style.as_str()
    );

    let frame_ms = settings.frame_interval_ms();
    let words = WordList::embedded(settings.seed);
    let mut game = Game::new(
        settings,
        Field::new(FIELD_WIDTH, FIELD_HEIGHT),
        MonospaceMetrics::default(),
        words,
    );
    let mut sink = CommandList::new();
    let mut typist = AutoTypist::default();
    let mut destroyed = 0u32;

    let mut now = 0.0;
    game.start(now);
    for frame in 1..=MAX_FRAMES {
        if let Some(value) = typist.keystroke(game.state()) {
            let outcome = game.on_input(&value);
            if outcome.fired.is_some() {
                destroyed += 1;
            }
            typist.typed = outcome.input;
        }

        now += frame_ms;
        match game.frame(now, false, &mut sink) {
            FrameStatus::Running => {
                if frame % 600 == 0 {
                    let state = game.state();
                    log::info!(
                        "{}s: {} words, {} projectiles, {} fragments, {} draw calls",
                        frame / 60,
                        state.words.len(),
                        state.projectiles.len(),
                        state.fragments.len(),
                        sink.commands.len()
                    );
                }
            }
            FrameStatus::GameOver { word } => {
                println!("Game over {}", word);
                println!("Destroyed {} words in {:.1}s", destroyed, now / 1000.0);
                return;
            }
            FrameStatus::Halted => break,
        }
    }

    println!(
        "Survived {:.1}s, destroyed {} words",
        now / 1000.0,
        destroyed
    );
}
