//! Letter frequency report
//!
//! Informational only; nothing in play depends on it.

use crate::core::{ALPHABET, ALPHABET_LEN, LetterSet, Word, letter_index};
use std::cmp::Reverse;

/// Number of words containing each letter at least once
#[must_use]
pub fn words_containing(words: &[Word]) -> [usize; ALPHABET_LEN] {
    let mut counts = [0usize; ALPHABET_LEN];
    for word in words {
        let letters: LetterSet = word.letters().iter().copied().collect();
        for letter in letters.iter() {
            counts[letter_index(letter)] += 1;
        }
    }
    counts
}

/// Distinct letters of `words` not in `exclude`, most frequent first
///
/// Frequency is the number of words containing the letter; equal
/// frequencies keep alphabet order.
///
/// # Examples
/// ```
/// use wordle_engine::core::{LetterSet, Word};
/// use wordle_engine::solver::letter_frequencies;
///
/// let words: Vec<Word> = ["bears", "dears", "fears"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let known: LetterSet = b"EARS".iter().copied().collect();
///
/// assert_eq!(letter_frequencies(&words, known), "BDF");
/// ```
#[must_use]
pub fn letter_frequencies(words: &[Word], exclude: LetterSet) -> String {
    let counts = words_containing(words);
    let mut letters: Vec<u8> = ALPHABET
        .iter()
        .copied()
        .filter(|&l| counts[letter_index(l)] > 0 && !exclude.contains(l))
        .collect();
    letters.sort_by_key(|&l| Reverse(counts[letter_index(l)]));
    letters.into_iter().map(char::from).collect()
}
