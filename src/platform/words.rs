//! Embedded dictionary word source

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::WordSource;

const DICTIONARY: &str = include_str!("../../assets/words.txt");

/// Picks words uniformly from a fixed list with a seeded RNG
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: Pcg32,
}

impl WordList {
    /// Build from arbitrary words; blank entries are dropped
    pub fn new<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The built-in English dictionary
    pub fn embedded(seed: u64) -> Self {
        Self::new(DICTIONARY.lines(), seed)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> String {
        // An empty list yields empty words; the spawner tolerates zero-width text
        self.words.choose(&mut self.rng).cloned().unwrap_or_default()
    }
}
