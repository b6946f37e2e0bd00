//! Candidate pruning
//!
//! Filters a word list down to the words consistent with a [`KnowledgeState`].
//! Every constraint is independent and only ever tightens, so a single
//! conjunction per word is enough.

use super::knowledge::KnowledgeState;
use crate::core::{ALPHABET, LetterSet, WORD_LEN, Word};

/// What a single position will accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionTest {
    /// Exactly this letter
    Exactly(u8),
    /// Anything except these letters
    Excluding(LetterSet),
}

impl PositionTest {
    #[inline]
    fn accepts(self, letter: u8) -> bool {
        match self {
            Self::Exactly(known) => letter == known,
            Self::Excluding(excluded) => !excluded.contains(letter),
        }
    }
}

/// Acceptance test compiled once from the knowledge, then run per word
#[derive(Debug, Clone)]
struct Acceptance {
    positions: [PositionTest; WORD_LEN],
    min_counts: Vec<(u8, usize)>,
}

impl Acceptance {
    fn from_knowledge(knowledge: &KnowledgeState) -> Self {
        let absent = knowledge.known_absent();
        let positions = std::array::from_fn(|position| {
            knowledge.position_known(position).map_or_else(
                || PositionTest::Excluding(knowledge.position_excluded(position).union(absent)),
                PositionTest::Exactly,
            )
        });

        let min_counts = ALPHABET
            .iter()
            .map(|&letter| (letter, knowledge.min_count(letter)))
            .filter(|&(_, count)| count > 0)
            .collect();

        Self {
            positions,
            min_counts,
        }
    }

    fn accepts(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .zip(word.letters())
            .all(|(test, &letter)| test.accepts(letter))
            && self
                .min_counts
                .iter()
                .all(|&(letter, count)| word.count_of(letter) >= count)
    }
}

/// Words from `words` consistent with everything in `knowledge`
///
/// Pure; the relative order of surviving words is preserved.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Feedback, Word};
/// use wordle_engine::solver::{KnowledgeState, prune};
///
/// let words: Vec<Word> = ["react", "trace", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = Feedback::evaluate(&words[0], &guess);
///
/// let mut knowledge = KnowledgeState::new(words.clone());
/// knowledge.update(&guess, &feedback).unwrap();
///
/// assert_eq!(prune(&words, &knowledge), vec![words[0].clone()]);
/// ```
#[must_use]
pub fn prune(words: &[Word], knowledge: &KnowledgeState) -> Vec<Word> {
    let acceptance = Acceptance::from_knowledge(knowledge);
    words
        .iter()
        .filter(|word| acceptance.accepts(word))
        .cloned()
        .collect()
}

/// Check a single word against the knowledge
#[must_use]
pub fn is_consistent(word: &Word, knowledge: &KnowledgeState) -> bool {
    Acceptance::from_knowledge(knowledge).accepts(word)
}
