//! Letter-value guess ranking
//!
//! A heuristic, not an optimal solver: each letter is worth the number of
//! times it occurs across the remaining candidates, discounted for letters
//! already known to be present, and a word is worth the sum of its letters.
//!
//! Two weaknesses are known and deliberately left in place:
//! - rhymes: with `BEARS DEARS FEARS ...` left, every guess probes one letter
//! - obscure guesses: equal scores fall back to list order, not familiarity

use super::knowledge::KnowledgeState;
use crate::core::{ALPHABET, ALPHABET_LEN, Word, letter_index};
use std::cmp::Reverse;

/// Per-letter values, indexed by [`letter_index`]
pub type LetterValues = [i64; ALPHABET_LEN];

/// Tuning constants for the valuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuatorConfig {
    /// Multiplier on the discount applied to letters known to be present
    pub known_count_weight: i64,
    /// Multiplier on the value of a letter repeated within one guess
    pub multi_penalty: i64,
}

impl Default for ValuatorConfig {
    fn default() -> Self {
        Self {
            known_count_weight: 1,
            multi_penalty: 0,
        }
    }
}

/// Scores letters and words against the current knowledge
#[derive(Debug, Clone, Copy, Default)]
pub struct Valuator {
    config: ValuatorConfig,
}

impl Valuator {
    #[must_use]
    pub const fn new(config: ValuatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> ValuatorConfig {
        self.config
    }

    /// Value of every letter over the knowledge's remaining candidates
    ///
    /// `occurrences - weight * min_count * candidates_containing`; letters
    /// that are not yet known present have `min_count == 0` and keep their
    /// full occurrence count.
    #[must_use]
    pub fn letter_values(&self, knowledge: &KnowledgeState) -> LetterValues {
        let mut occurrences = [0i64; ALPHABET_LEN];
        let mut containing = [0i64; ALPHABET_LEN];

        for word in knowledge.candidates() {
            for (idx, &count) in word.letter_counts().iter().enumerate() {
                if count > 0 {
                    occurrences[idx] += i64::from(count);
                    containing[idx] += 1;
                }
            }
        }

        let mut values = occurrences;
        for &letter in ALPHABET {
            let idx = letter_index(letter);
            let known = knowledge.min_count(letter) as i64;
            let discount = self
                .config
                .known_count_weight
                .saturating_mul(known)
                .saturating_mul(containing[idx])
                .max(0);
            values[idx] = values[idx].saturating_sub(discount);
        }
        values
    }

    /// Sum of letter values; repeats after the first occurrence are scaled
    /// by `multi_penalty`
    ///
    /// Arithmetic saturates, so extreme tuning values cannot overflow.
    #[must_use]
    pub fn score_word(&self, word: &Word, values: &LetterValues) -> i64 {
        (0..word.letters().len())
            .map(|position| {
                let value = values[letter_index(word.letter_at(position))];
                if word.repeats_earlier(position) {
                    value.saturating_mul(self.config.multi_penalty)
                } else {
                    value
                }
            })
            .fold(0, i64::saturating_add)
    }

    /// Pool words with their scores, best first
    ///
    /// The sort is stable: equal scores keep pool order.
    #[must_use]
    pub fn scored_candidates<'a>(
        &self,
        pool: &'a [Word],
        knowledge: &KnowledgeState,
    ) -> Vec<(&'a Word, i64)> {
        let values = self.letter_values(knowledge);
        let mut scored: Vec<(&Word, i64)> = pool
            .iter()
            .map(|word| (word, self.score_word(word, &values)))
            .collect();
        scored.sort_by_key(|&(_, score)| Reverse(score));
        scored
    }

    /// Pool words ordered best-first
    #[must_use]
    pub fn rank_candidates<'a>(
        &self,
        pool: &'a [Word],
        knowledge: &KnowledgeState,
    ) -> Vec<&'a Word> {
        self.scored_candidates(pool, knowledge)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// The first word of the ranking, or `None` for an empty pool
    #[must_use]
    pub fn best_guess<'a>(&self, pool: &'a [Word], knowledge: &KnowledgeState) -> Option<&'a Word> {
        let values = self.letter_values(knowledge);
        // First maximum wins, matching the stable ranking
        pool.iter()
            .map(|word| (word, self.score_word(word, &values)))
            .fold(None, |best: Option<(&Word, i64)>, (word, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((word, score)),
            })
            .map(|(word, _)| word)
    }

    /// Letters with a value of at least 1, highest value first
    ///
    /// Equal values keep alphabet order.
    #[must_use]
    pub fn ranked_letters(&self, knowledge: &KnowledgeState) -> String {
        let values = self.letter_values(knowledge);
        let mut letters: Vec<u8> = ALPHABET
            .iter()
            .copied()
            .filter(|&l| values[letter_index(l)] >= 1)
            .collect();
        letters.sort_by_key(|&l| Reverse(values[letter_index(l)]));
        letters.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts<'a>(ranked: &[&'a Word]) -> Vec<&'a str> {
        ranked.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn default_config() {
        let config = ValuatorConfig::default();
        assert_eq!(config.known_count_weight, 1);
        assert_eq!(config.multi_penalty, 0);
    }

    #[test]
    fn letter_values_count_occurrences() {
        let knowledge = KnowledgeState::new(words(&["crane", "crate", "grate", "llama"]));
        let values = Valuator::default().letter_values(&knowledge);

        assert_eq!(values[letter_index(b'R')], 3);
        assert_eq!(values[letter_index(b'A')], 5);
        assert_eq!(values[letter_index(b'L')], 2);
        assert_eq!(values[letter_index(b'Z')], 0);
    }

    #[test]
    fn ranks_by_score_ties_keep_pool_order() {
        let pool = words(&["crane", "crate", "grate"]);
        let knowledge = KnowledgeState::new(pool.clone());
        let valuator = Valuator::default();

        // C2 R3 A3 N1 E3 T2 G1: CRANE 12, CRATE 13, GRATE 12
        let scored = valuator.scored_candidates(&pool, &knowledge);
        let scores: Vec<i64> = scored.iter().map(|&(_, s)| s).collect();
        assert_eq!(scores, [13, 12, 12]);

        let ranked = valuator.rank_candidates(&pool, &knowledge);
        assert_eq!(texts(&ranked), ["CRATE", "CRANE", "GRATE"]);
        assert_eq!(valuator.best_guess(&pool, &knowledge).unwrap().text(), "CRATE");
    }

    #[test]
    fn known_letters_are_discounted() {
        let pool = words(&["crane", "crate", "grate"]);
        let mut knowledge = KnowledgeState::new(pool.clone());
        knowledge
            .update(&Word::new("robin").unwrap(), &"?----".parse::<Feedback>().unwrap())
            .unwrap();

        let valuator = Valuator::default();
        let values = valuator.letter_values(&knowledge);
        assert_eq!(values[letter_index(b'R')], 0);

        let scores: Vec<i64> = valuator
            .scored_candidates(&pool, &knowledge)
            .iter()
            .map(|&(_, s)| s)
            .collect();
        assert_eq!(scores, [10, 9, 9]);
    }

    #[test]
    fn known_count_weight_is_configurable() {
        let pool = words(&["crane", "crate", "grate"]);
        let mut knowledge = KnowledgeState::new(pool.clone());
        knowledge
            .update(&Word::new("robin").unwrap(), &"?----".parse::<Feedback>().unwrap())
            .unwrap();

        let valuator = Valuator::new(ValuatorConfig {
            known_count_weight: 0,
            ..ValuatorConfig::default()
        });
        assert_eq!(valuator.letter_values(&knowledge)[letter_index(b'R')], 3);
    }

    #[test]
    fn repeated_letters_count_once_by_default() {
        let knowledge = KnowledgeState::new(words(&["eerie", "crane"]));
        let eerie = Word::new("eerie").unwrap();

        let plain = Valuator::default();
        let values = plain.letter_values(&knowledge);
        // E4 R2 I1: E + R + I, the extra E's add nothing
        assert_eq!(plain.score_word(&eerie, &values), 4 + 2 + 1);

        let penalized = Valuator::new(ValuatorConfig {
            multi_penalty: 1,
            ..ValuatorConfig::default()
        });
        assert_eq!(penalized.score_word(&eerie, &values), 4 * 3 + 2 + 1);
    }

    #[test]
    fn extreme_tuning_saturates() {
        let mut knowledge = KnowledgeState::new(words(&["react", "crane", "eerie"]));
        knowledge
            .update(&Word::new("crane").unwrap(), &"??*-?".parse::<Feedback>().unwrap())
            .unwrap();

        let valuator = Valuator::new(ValuatorConfig {
            known_count_weight: i64::MAX,
            multi_penalty: i64::MAX,
        });
        let values = valuator.letter_values(&knowledge);
        assert!(values[letter_index(b'R')] < 0);
        // N is not known present, so no discount applies
        assert_eq!(values[letter_index(b'N')], 1);

        let eerie = Word::new("eerie").unwrap();
        assert!(valuator.score_word(&eerie, &values) < 0);
        assert_eq!(
            valuator.best_guess(knowledge.candidates(), &knowledge).map(Word::text),
            Some("REACT")
        );
    }

    #[test]
    fn ranked_letters_skip_worthless_letters() {
        let knowledge = KnowledgeState::new(words(&["crane", "crate", "grate"]));
        // R A E 3, C T 2, G N 1; ties in alphabet order
        assert_eq!(Valuator::default().ranked_letters(&knowledge), "AERCTGN");
    }

    #[test]
    fn empty_pool_has_no_best_guess() {
        let knowledge = KnowledgeState::new(Vec::new());
        assert!(Valuator::default().best_guess(&[], &knowledge).is_none());
        assert!(Valuator::default().ranked_letters(&knowledge).is_empty());
    }
}
