//! Formatting utilities for terminal output

use crate::core::{ALPHABET, Feedback, Mark, Word};
use crate::solver::KnowledgeState;
use colored::Colorize;

/// Same text with a space between each character
#[must_use]
pub fn spaced(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// The guess with each letter coloured by its mark
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter));
            match mark {
                Mark::Hit => tile.black().on_green().bold().to_string(),
                Mark::Partial => tile.black().on_yellow().bold().to_string(),
                Mark::Miss => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// One status symbol per alphabet letter, aligned with `spaced(ALPHABET)`
#[must_use]
pub fn alphabet_status(knowledge: &KnowledgeState) -> String {
    ALPHABET
        .iter()
        .map(|&letter| knowledge.status(letter).symbol())
        .collect()
}
