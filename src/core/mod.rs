//! Core domain types for the game
//!
//! Words, letter sets and per-guess feedback. Everything here is pure and
//! cheap to clone; nothing in this module knows about game state.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use letters::{ALPHABET, ALPHABET_LEN, LetterSet, letter_index};
pub use word::{WORD_LEN, Word, WordError};
