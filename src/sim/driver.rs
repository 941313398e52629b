//! Game loop driver
//!
//! Owns the simulation state and its collaborators. The host calls
//! [`Game::frame`] once per display frame and [`Game::on_input`] whenever the
//! input text changes; both take `&mut self`, so a keystroke is always fully
//! applied before the next frame steps.

use super::clock::FrameClock;
use super::matcher::{MatchOutcome, apply_input};
use super::spawn::{SpawnTimer, spawn_word};
use super::state::{Field, GamePhase, GameState};
use super::tick::tick;
use crate::platform::{GlyphMetrics, RenderSink, WordSource};
use crate::renderer::draw_frame;
use crate::settings::Settings;

/// What the host should do after a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule the next frame
    Running,
    /// A word escaped on this frame; notify the player. Reported once.
    GameOver { word: String },
    /// The game already ended; nothing was stepped or drawn
    Halted,
}

/// A running game session
pub struct Game<M, W> {
    settings: Settings,
    state: GameState,
    clock: FrameClock,
    /// Cancelled (None) once the game is over
    spawn_timer: Option<SpawnTimer>,
    metrics: M,
    words: W,
}

impl<M: GlyphMetrics, W: WordSource> Game<M, W> {
    pub fn new(settings: Settings, field: Field, metrics: M, words: W) -> Self {
        log::info!(
            "Starting game: field {}x{}, seed {}, spawn every {}ms",
            field.width,
            field.height,
            settings.seed,
            settings.spawn_interval_ms
        );
        Self {
            state: GameState::new(field, settings.seed),
            clock: FrameClock::new(settings.frame_interval_ms(), settings.stall_threshold_ms),
            spawn_timer: Some(SpawnTimer::new(settings.spawn_interval_ms)),
            settings,
            metrics,
            words,
        }
    }

    /// Seed the frame clock with the loop's start time
    pub fn start(&mut self, now_ms: f64) {
        self.clock.start(now_ms);
    }

    /// Run one frame: timing, spawn, step, render, loss check
    pub fn frame<S>(&mut self, now_ms: f64, hidden: bool, sink: &mut S) -> FrameStatus
    where
        S: RenderSink + ?Sized,
    {
        let Some(timer) = self.spawn_timer.as_mut() else {
            return FrameStatus::Halted;
        };

        let time = self.clock.advance(now_ms);

        if hidden && self.settings.pause_spawns_when_hidden {
            timer.reset();
        } else if timer.advance(time.delta_ms) {
            spawn_word(&mut self.state, &self.metrics, &mut self.words);
        }

        tick(&mut self.state, &self.settings, &self.metrics, time.scale);
        draw_frame(&self.state, &self.metrics, sink);

        match &self.state.phase {
            GamePhase::Running => FrameStatus::Running,
            GamePhase::GameOver { word } => {
                self.spawn_timer = None;
                log::info!(
                    "Game ended after {} frames with {} words on screen",
                    self.state.frames,
                    self.state.words.len()
                );
                FrameStatus::GameOver { word: word.clone() }
            }
        }
    }

    /// Apply a change of the player's input text.
    ///
    /// Returns the text the input surface must display, which is empty after a
    /// completed word.
    pub fn on_input(&mut self, value: &str) -> MatchOutcome {
        if !self.state.is_running() {
            return MatchOutcome {
                fired: None,
                input: value.to_string(),
            };
        }
        apply_input(&mut self.state, value)
    }

    /// Change the field size. Live words keep their positions; new spawns
    /// clamp to the new width.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.field = Field::new(width, height);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_over(&self) -> bool {
        self.spawn_timer.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MonospaceMetrics;
    use crate::consts::WORD_FALL_SPEED;
    use crate::renderer::CommandList;

    const FRAME: f64 = 1000.0 / 60.0;

    fn game(field: Field) -> Game<MonospaceMetrics, impl FnMut() -> String> {
        let mut n = 0;
        let words = move || {
            n += 1;
            if n % 2 == 0 { "dog".to_string() } else { "cat".to_string() }
        };
        Game::new(
            Settings::default(),
            field,
            MonospaceMetrics::new(10.0, 20.0),
            words,
        )
    }

    /// Run frames at 60 Hz from `*now` until `count` frames or a non-running status
    fn run(game: &mut Game<MonospaceMetrics, impl FnMut() -> String>, now: &mut f64, count: usize) -> FrameStatus {
        let mut sink = CommandList::new();
        for _ in 0..count {
            *now += FRAME;
            let status = game.frame(*now, false, &mut sink);
            if status != FrameStatus::Running {
                return status;
            }
        }
        FrameStatus::Running
    }

    #[test]
    fn test_spawns_one_word_per_second() {
        let mut g = game(Field::new(800.0, 10_000.0));
        let mut now = 0.0;
        g.start(now);
        run(&mut g, &mut now, 150);
        assert_eq!(g.state().words.len(), 2);
        for w in &g.state().words {
            assert!(w.pos.x >= 0.0 && w.pos.x + w.width() <= 800.0);
        }
    }

    #[test]
    fn test_hidden_surface_skips_spawns() {
        let mut g = game(Field::new(800.0, 10_000.0));
        let mut sink = CommandList::new();
        g.start(0.0);
        for i in 1..=300 {
            g.frame(i as f64 * FRAME, true, &mut sink);
        }
        assert!(g.state().words.is_empty());
        // Becoming visible does not release a backlog
        g.frame(301.0 * FRAME, false, &mut sink);
        assert!(g.state().words.is_empty());
    }

    #[test]
    fn test_typing_destroys_word() {
        let mut g = game(Field::new(800.0, 600.0));
        let mut now = 0.0;
        g.start(now);
        run(&mut g, &mut now, 61);
        assert_eq!(g.state().words.len(), 1);
        assert_eq!(g.state().words[0].text(), "cat");

        assert_eq!(g.on_input("ca").input, "ca");
        let out = g.on_input("cat");
        assert!(out.fired.is_some());
        assert_eq!(out.input, "");

        run(&mut g, &mut now, 20);
        assert!(g.state().projectiles.is_empty());
        assert!(g.state().words.is_empty());
        assert!(!g.state().fragments.is_empty());
    }

    #[test]
    fn test_loss_halts_everything() {
        let mut g = game(Field::new(800.0, 100.0));
        let mut now = 0.0;
        g.start(now);
        let status = run(&mut g, &mut now, 10_000);
        assert_eq!(
            status,
            FrameStatus::GameOver {
                word: "cat".to_string()
            }
        );
        assert!(g.is_over());

        let frames = g.state().frames;
        let words = g.state().words.len();
        let mut sink = CommandList::new();
        for i in 1..=200 {
            assert_eq!(g.frame(now + i as f64 * FRAME, false, &mut sink), FrameStatus::Halted);
        }
        assert_eq!(g.state().frames, frames);
        assert_eq!(g.state().words.len(), words);
        assert!(sink.commands.is_empty());
        assert_eq!(g.on_input("dog").fired, None);
    }

    #[test]
    fn test_resize_applies_to_new_spawns() {
        let mut g = game(Field::new(800.0, 10_000.0));
        let mut now = 0.0;
        g.start(now);
        // Narrower than "cat" (30px): the word is pinned to the left edge
        g.resize(20.0, 10_000.0);
        run(&mut g, &mut now, 61);
        let w = &g.state().words[0];
        assert_eq!(w.pos.x, 0.0);
        assert_eq!(g.state().field.width, 20.0);
    }

    #[test]
    fn test_motion_survives_a_stalled_frame() {
        let mut g = game(Field::new(800.0, 10_000.0));
        let mut now = 0.0;
        g.start(now);
        run(&mut g, &mut now, 61);
        let y = g.state().words[0].pos.y;

        // A five second stall moves exactly one target frame
        let mut sink = CommandList::new();
        now += 5000.0;
        g.frame(now, false, &mut sink);
        let moved = g.state().words[0].pos.y - y;
        assert!((moved - g.settings().word_fall_speed).abs() < 1e-4);
    }

    /// Fall distance of the first word over one second sampled at `hz`
    fn fall_over_one_second(hz: u32) -> f32 {
        let mut g = game(Field::new(800.0, 10_000.0));
        let mut sink = CommandList::new();
        let mut now = 0.0;
        g.start(now);
        run(&mut g, &mut now, 61);
        let y = g.state().words[0].pos.y;

        let step = 1000.0 / hz as f64;
        for _ in 0..hz {
            now += step;
            g.frame(now, false, &mut sink);
        }
        g.state().words[0].pos.y - y
    }

    #[test]
    fn test_slow_host_falls_as_far_as_fast_host() {
        let slow = fall_over_one_second(10);
        let fast = fall_over_one_second(60);
        assert!((slow - fast).abs() < 1e-3, "10 Hz fell {slow}, 60 Hz fell {fast}");
        assert!((fast - 60.0 * WORD_FALL_SPEED).abs() < 1e-3);
    }
}
