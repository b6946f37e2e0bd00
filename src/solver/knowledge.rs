//! Accumulated knowledge about the hidden solution
//!
//! One [`KnowledgeState`] exists per game. It folds every (guess, feedback)
//! pair into per-position and per-letter constraints, and owns the game's
//! current candidate list.

use super::prune::prune;
use crate::core::{
    ALPHABET, ALPHABET_LEN, Feedback, LetterSet, Mark, WORD_LEN, Word, letter_index,
};
use crate::wordlists::Lexicon;

/// What is known about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    /// Absent from the solution
    Miss,
    /// Present, position not pinned by any hit
    Partial,
    /// Present, and hit at least once
    Hit,
}

impl LetterStatus {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => ' ',
            Self::Miss => '-',
            Self::Partial => '?',
            Self::Hit => '*',
        }
    }

    /// Hit and Partial both mean "somewhere in the solution"
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Hit | Self::Partial)
    }
}

/// An update that contradicts what is already known
///
/// Feedback from the evaluator never triggers these; they signal a defect
/// or hand-entered feedback that cannot belong to any single solution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    #[error("{guess}: hit on {letter} at position {position}, but that position is known to be {known}")]
    ConflictingHit {
        guess: String,
        position: usize,
        letter: char,
        known: char,
    },

    #[error("{guess}: {letter} is known to be at position {position}, but was not marked a hit there")]
    KnownLetterNotHit {
        guess: String,
        position: usize,
        letter: char,
    },

    #[error("{guess}: {letter} was proven absent, but is marked present at position {position}")]
    AbsentLetterPresent {
        guess: String,
        position: usize,
        letter: char,
    },
}

/// Belief state about the hidden solution
#[derive(Debug, Clone)]
pub struct KnowledgeState {
    position_known: [Option<u8>; WORD_LEN],
    position_excluded: [LetterSet; WORD_LEN],
    letter_status: [LetterStatus; ALPHABET_LEN],
    known_present: LetterSet,
    known_absent: LetterSet,
    min_count: [u8; ALPHABET_LEN],
    candidates: Vec<Word>,
    updates: usize,
}

impl KnowledgeState {
    /// Empty knowledge over the given candidate list
    #[must_use]
    pub fn new(candidates: Vec<Word>) -> Self {
        Self {
            position_known: [None; WORD_LEN],
            position_excluded: [LetterSet::EMPTY; WORD_LEN],
            letter_status: [LetterStatus::Unknown; ALPHABET_LEN],
            known_present: LetterSet::EMPTY,
            known_absent: LetterSet::EMPTY,
            min_count: [0; ALPHABET_LEN],
            candidates,
            updates: 0,
        }
    }

    /// Empty knowledge over a private copy of the lexicon
    #[must_use]
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self::new(lexicon.words().to_vec())
    }

    /// Fold one guess and its feedback into the state
    ///
    /// The update is validated first; on error nothing is modified.
    ///
    /// # Errors
    ///
    /// Returns `KnowledgeError` if the feedback contradicts earlier feedback.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), KnowledgeError> {
        self.check_consistent(guess, feedback)?;

        // Per-position facts
        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            let status = &mut self.letter_status[letter_index(letter)];
            match mark {
                Mark::Hit => {
                    self.position_known[position] = Some(letter);
                    *status = LetterStatus::Hit;
                }
                Mark::Partial => {
                    self.position_excluded[position].insert(letter);
                    if *status != LetterStatus::Hit {
                        *status = LetterStatus::Partial;
                    }
                }
                Mark::Miss => {
                    self.position_excluded[position].insert(letter);
                }
            }
        }

        // A miss only proves absence when no other occurrence of the letter
        // has ever been marked present; must follow the full per-position pass.
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            let status = &mut self.letter_status[letter_index(letter)];
            if mark == Mark::Miss && !status.is_present() {
                *status = LetterStatus::Miss;
            }
        }

        self.known_present = ALPHABET
            .iter()
            .copied()
            .filter(|&l| self.status(l).is_present())
            .collect();
        self.known_absent = ALPHABET
            .iter()
            .copied()
            .filter(|&l| self.status(l) == LetterStatus::Miss)
            .collect();

        let mut present_in_guess = [0u8; ALPHABET_LEN];
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            if mark.is_present() {
                present_in_guess[letter_index(letter)] += 1;
            }
        }
        for (stored, &seen) in self.min_count.iter_mut().zip(&present_in_guess) {
            *stored = (*stored).max(seen);
        }

        self.updates += 1;
        log::debug!(
            "{guess} {feedback}: present={} absent={} pattern={}",
            self.known_present,
            self.known_absent,
            self.known_pattern()
        );

        Ok(())
    }

    fn check_consistent(&self, guess: &Word, feedback: &Feedback) -> Result<(), KnowledgeError> {
        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            let text = || guess.text().to_string();
            match (self.position_known[position], mark) {
                (Some(known), Mark::Hit) if known != letter => {
                    return Err(KnowledgeError::ConflictingHit {
                        guess: text(),
                        position,
                        letter: char::from(letter),
                        known: char::from(known),
                    });
                }
                (Some(known), Mark::Partial | Mark::Miss) if known == letter => {
                    return Err(KnowledgeError::KnownLetterNotHit {
                        guess: text(),
                        position,
                        letter: char::from(letter),
                    });
                }
                _ => {}
            }
            if mark.is_present() && self.status(letter) == LetterStatus::Miss {
                return Err(KnowledgeError::AbsentLetterPresent {
                    guess: text(),
                    position,
                    letter: char::from(letter),
                });
            }
        }
        Ok(())
    }

    /// Replace the candidate list with the words still consistent with
    /// everything known
    ///
    /// Returns the number of candidates removed.
    pub fn prune(&mut self) -> usize {
        let before = self.candidates.len();
        let pruned = prune(&self.candidates, self);
        self.candidates = pruned;
        let removed = before - self.candidates.len();
        log::debug!(
            "pruned {removed} of {before} candidates, {} remain",
            self.candidates.len()
        );
        removed
    }

    /// The letter proven to occupy `position`, if any
    #[inline]
    #[must_use]
    pub const fn position_known(&self, position: usize) -> Option<u8> {
        self.position_known[position]
    }

    /// Letters proven not to occupy `position`
    #[inline]
    #[must_use]
    pub const fn position_excluded(&self, position: usize) -> LetterSet {
        self.position_excluded[position]
    }

    #[inline]
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        self.letter_status[letter_index(letter)]
    }

    /// Letters known to be somewhere in the solution
    #[inline]
    #[must_use]
    pub const fn known_present(&self) -> LetterSet {
        self.known_present
    }

    /// Letters known to be absent from the solution
    #[inline]
    #[must_use]
    pub const fn known_absent(&self) -> LetterSet {
        self.known_absent
    }

    /// Lower bound on the number of occurrences of `letter` in the solution
    #[inline]
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        usize::from(self.min_count[letter_index(letter)])
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// True once pruning has left no candidate at all
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of updates applied so far
    #[inline]
    #[must_use]
    pub const fn updates(&self) -> usize {
        self.updates
    }

    /// Known positions as a pattern like `.R.N.`
    #[must_use]
    pub fn known_pattern(&self) -> String {
        self.position_known
            .iter()
            .map(|known| known.map_or('.', char::from))
            .collect()
    }
}
