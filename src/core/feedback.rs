//! Per-guess feedback and its evaluation
//!
//! A feedback code holds one mark per position:
//! - `Hit` (`*`): letter is in the solution at this position
//! - `Partial` (`?`): letter is in the solution, elsewhere
//! - `Miss` (`-`): no unmatched occurrence of the letter remains in the solution

use super::letters::{ALPHABET_LEN, letter_index};
use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Hit,
    Partial,
    Miss,
}

impl Mark {
    /// Console symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => '*',
            Self::Partial => '?',
            Self::Miss => '-',
        }
    }

    /// Inverse of [`Mark::symbol`]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '*' => Some(Self::Hit),
            '?' => Some(Self::Partial),
            '-' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Hit and Partial both prove the letter is present
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Hit | Self::Partial)
    }
}

/// Feedback code for one guess, aligned index-for-index with the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

/// Error type for unparsable feedback text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly {WORD_LEN} marks, got {0}")]
    InvalidLength(usize),

    #[error("unrecognized feedback mark '{mark}' at position {position}")]
    UnrecognizedMark { mark: char, position: usize },
}

impl Feedback {
    /// All hits: the guess was the solution
    pub const SOLVED: Self = Self([Mark::Hit; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Evaluate `guess` against the hidden `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as hits and remove those letters
    ///    from the pool of unmatched solution letters
    /// 2. Second pass: for every non-hit position, consume one unmatched
    ///    occurrence of the guessed letter if any remains (partial),
    ///    otherwise mark a miss
    ///
    /// Hits must be consumed first, or a guess with more copies of a letter
    /// than the solution over-reports partials.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Word};
    ///
    /// let solution = Word::new("react").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::evaluate(&solution, &guess).to_string(), "??*-?");
    /// ```
    #[must_use]
    pub fn evaluate(solution: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Miss; WORD_LEN];
        let mut unmatched: [u8; ALPHABET_LEN] = solution.letter_counts();

        for (i, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                marks[i] = Mark::Hit;
                unmatched[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Hit {
                continue;
            }
            let available = &mut unmatched[letter_index(g)];
            if *available > 0 {
                marks[i] = Mark::Partial;
                *available -= 1;
            }
        }

        Self(marks)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Miss; WORD_LEN];
        for (position, (&mark, slot)) in symbols.iter().zip(marks.iter_mut()).enumerate() {
            *slot = Mark::from_symbol(mark)
                .ok_or(FeedbackError::UnrecognizedMark { mark, position })?;
        }

        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
