//! Word round logic.
//!
//! Handles word selection, letter evaluation, and hints.

use super::{GuessOutcome, WordRound};
use log::warn;
use rand::Rng;

/// Draw a new secret word from `words` and clear all round progress.
/// Leaves the round untouched if `words` is empty.
pub fn init_round<S: AsRef<str>, R: Rng>(round: &mut WordRound, words: &[S], rng: &mut R) {
    if words.is_empty() {
        warn!("init_round called with an empty word list");
        return;
    }
    let index = rng.gen_range(0..words.len());
    round.current_word = Some(words[index].as_ref().to_uppercase());
    round.guessed_letters.clear();
    round.wrong_guesses = 0;
    round.is_word_guessed = false;
}

/// Evaluate a letter guess. Re-guessing a letter is a no-op, never a penalty.
pub fn guess_letter(round: &mut WordRound, letter: char) -> GuessOutcome {
    let Some(word) = round.current_word.as_deref() else {
        return GuessOutcome::Ignored;
    };
    if round.guessed_letters.contains(&letter) {
        return GuessOutcome::Ignored;
    }

    let correct = word.contains(letter);
    round.guessed_letters.insert(letter);
    if !correct {
        round.wrong_guesses += 1;
    }
    round.is_word_guessed = is_complete(word, round);

    if correct {
        GuessOutcome::Correct
    } else {
        GuessOutcome::Incorrect
    }
}

/// Reveal one random unguessed character of the word.
/// Returns `None` when there is no word or nothing left to reveal.
pub fn use_hint<R: Rng>(round: &mut WordRound, rng: &mut R) -> Option<char> {
    let word = round.current_word.as_deref()?;
    let hidden: Vec<char> = word
        .chars()
        .filter(|c| !round.guessed_letters.contains(c))
        .collect();
    if hidden.is_empty() {
        return None;
    }

    let letter = hidden[rng.gen_range(0..hidden.len())];
    round.guessed_letters.insert(letter);
    round.is_word_guessed = is_complete(word, round);
    Some(letter)
}

/// Clear the round back to its initial state.
pub fn reset_round(round: &mut WordRound) {
    *round = WordRound::new();
}

fn is_complete(word: &str, round: &WordRound) -> bool {
    word.chars().all(|c| round.guessed_letters.contains(&c))
}
