//! Input matching
//!
//! Matched-prefix state is recomputed from scratch on every input change.
//! A full match promotes the word to a projectile and clears the input.

use glam::Vec2;

use super::state::{GameState, Projectile};

/// Result of applying one input change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Projectile fired by this change, if a word was completed
    pub fired: Option<u32>,
    /// Text the input surface must display afterwards
    pub input: String,
}

/// Mark every live word against `input`
fn mark_words(state: &mut GameState, input: &str) {
    for word in &mut state.words {
        word.set_matched(input);
    }
}

/// Apply the player's full input string
///
/// Completes at most one word per call: the oldest live word whose text
/// equals the input.
pub fn apply_input(state: &mut GameState, input: &str) -> MatchOutcome {
    state.input.clear();
    state.input.push_str(input);
    mark_words(state, input);

    if input.is_empty() {
        return MatchOutcome {
            fired: None,
            input: String::new(),
        };
    }

    let Some(index) = state.words.iter().position(|w| w.text() == input) else {
        return MatchOutcome {
            fired: None,
            input: input.to_string(),
        };
    };

    // The target keeps its full highlight while in flight
    let target = state.words.remove(index);
    let id = state.next_entity_id();
    let pos = Vec2::new(target.pos.x, state.field.height);
    log::debug!("Word '{}' completed, projectile {} fired", target.text(), id);
    state.projectiles.push(Projectile { id, pos, target });

    // Clearing the input re-marks the remaining words against ""
    state.input.clear();
    mark_words(state, "");

    MatchOutcome {
        fired: Some(id),
        input: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::TextMetrics;
    use crate::sim::state::{FallingWord, Field};
    use proptest::prelude::*;

    fn state_with(words: &[&str]) -> GameState {
        let mut state = GameState::new(Field::new(800.0, 600.0), 1);
        for (i, text) in words.iter().enumerate() {
            let id = state.next_entity_id();
            state.words.push(FallingWord::new(
                id,
                Vec2::new(i as f32 * 100.0, 50.0),
                *text,
                TextMetrics {
                    width: 40.0,
                    height: 20.0,
                },
            ));
        }
        state
    }

    fn matched(state: &GameState) -> Vec<Option<&str>> {
        state.words.iter().map(|w| w.matched()).collect()
    }

    #[test]
    fn test_prefix_marks_only_matching_words() {
        let mut state = state_with(&["cat", "car", "dog"]);
        let out = apply_input(&mut state, "ca");
        assert_eq!(out.fired, None);
        assert_eq!(out.input, "ca");
        assert_eq!(matched(&state), [Some("ca"), Some("ca"), None]);

        apply_input(&mut state, "cat");
        assert_eq!(state.words.len(), 2);
        assert_eq!(matched(&state), [None, None]);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let mut state = state_with(&["Cat"]);
        apply_input(&mut state, "c");
        assert_eq!(matched(&state), [None]);
    }

    #[test]
    fn test_mismatch_clears_previous_prefix() {
        let mut state = state_with(&["cat"]);
        apply_input(&mut state, "c");
        apply_input(&mut state, "cx");
        assert_eq!(matched(&state), [None]);
        apply_input(&mut state, "c");
        assert_eq!(matched(&state), [Some("c")]);
    }

    #[test]
    fn test_completion_fires_projectile_from_bottom() {
        let mut state = state_with(&["dog", "cat"]);
        let out = apply_input(&mut state, "cat");
        let id = out.fired.unwrap();
        assert_eq!(out.input, "");
        assert_eq!(state.input, "");

        let projectile = &state.projectiles[0];
        assert_eq!(projectile.id, id);
        assert_eq!(projectile.pos, Vec2::new(100.0, 600.0));
        assert_eq!(projectile.target.text(), "cat");
        assert_eq!(projectile.target.matched(), Some("cat"));
        assert_eq!(state.words.len(), 1);
        assert_eq!(state.words[0].text(), "dog");
    }

    #[test]
    fn test_duplicate_words_complete_one_at_a_time() {
        let mut state = state_with(&["cat", "cat", "cat"]);
        let out = apply_input(&mut state, "cat");
        assert!(out.fired.is_some());
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.words.len(), 2);
        // The oldest word is taken first
        assert_eq!(state.projectiles[0].target.pos.x, 0.0);
    }

    #[test]
    fn test_completion_resets_other_prefixes() {
        let mut state = state_with(&["cat", "cats"]);
        apply_input(&mut state, "cat");
        assert_eq!(state.words.len(), 1);
        assert_eq!(state.words[0].text(), "cats");
        assert_eq!(state.words[0].matched(), None);
    }

    #[test]
    fn test_empty_input_clears_and_completes_nothing() {
        let mut state = state_with(&["cat", ""]);
        apply_input(&mut state, "c");
        let out = apply_input(&mut state, "");
        assert_eq!(out.fired, None);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.words.len(), 2);
        assert_eq!(matched(&state), [None, None]);
    }

    proptest! {
        #[test]
        fn prop_prefix_invariant(
            words in prop::collection::vec("[ab]{0,4}", 0..8),
            inputs in prop::collection::vec("[ab]{0,4}", 1..6),
        ) {
            let texts: Vec<&str> = words.iter().map(String::as_str).collect();
            let mut state = state_with(&texts);
            for input in &inputs {
                let before = state.words.len();
                let out = apply_input(&mut state, input);
                let s = out.input.as_str();
                for w in &state.words {
                    if !s.is_empty() && w.text().starts_with(s) {
                        prop_assert_eq!(w.matched(), Some(s));
                    } else {
                        prop_assert_eq!(w.matched(), None);
                    }
                }
                // At most one completion per change
                let completed = before - state.words.len();
                prop_assert!(completed <= 1);
                prop_assert_eq!(completed == 1, out.fired.is_some());
            }
        }
    }
}
