//! Word round data structures.
//!
//! A hangman-style round: the player uncovers a secret word one letter
//! at a time, and every miss draws another piece of the gallows.

use crate::core::constants::ALPHABET;
use std::collections::HashSet;

/// Result of guessing a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The word contains the letter.
    Correct,
    /// The word does not contain the letter; the wrong-guess counter grew.
    Incorrect,
    /// No active word, or the letter was already guessed. Nothing changed.
    Ignored,
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

/// State of guessing one secret word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordRound {
    /// Upper-cased secret word, `None` before the first draw or after a reset.
    pub current_word: Option<String>,
    pub guessed_letters: HashSet<char>,
    pub wrong_guesses: u32,
    pub is_word_guessed: bool,
}

impl WordRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.current_word.is_some()
    }

    pub fn is_letter_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Renders the word with unrevealed characters as `_`, separated by spaces.
    pub fn masked_word(&self) -> String {
        let Some(word) = &self.current_word else {
            return String::new();
        };
        word.chars()
            .map(|c| if self.is_letter_guessed(c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of positions in the word still hidden.
    pub fn hidden_letter_count(&self) -> usize {
        self.current_word
            .as_deref()
            .map(|w| w.chars().filter(|c| !self.is_letter_guessed(*c)).count())
            .unwrap_or(0)
    }
}

/// The fixed on-screen keyboard, in alphabet order.
pub fn keyboard() -> Vec<char> {
    ALPHABET.chars().collect()
}
