//! Ordered, duplicate-free word collection

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// An ordered sequence of distinct words
///
/// Insertion order is preserved; adding a word that is already present is a
/// no-op. A lexicon is read-only during play and can be shared between games.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from words, keeping the first of any duplicates
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut lexicon = Self::new();
        lexicon.merge(words);
        lexicon
    }

    /// Build a lexicon from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::from_slice(&["crane", "toolong", "slate", "CRANE"]);
    /// assert_eq!(lexicon.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// Append a word unless already present
    ///
    /// Returns `true` if the word was added.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Append every word not already present, preserving existing order
    ///
    /// Returns the number of words added.
    pub fn merge<I: IntoIterator<Item = Word>>(&mut self, words: I) -> usize {
        words
            .into_iter()
            .map(|word| self.insert(word))
            .filter(|&added| added)
            .count()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Pick a uniformly random word, or `None` if the lexicon is empty
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn texts(lexicon: &Lexicon) -> Vec<&str> {
        lexicon.iter().map(Word::text).collect()
    }

    #[test]
    fn from_slice_preserves_order_and_skips_invalid() {
        let lexicon = Lexicon::from_slice(&["crane", "toolong", "abc", "slate", "irate"]);
        assert_eq!(texts(&lexicon), ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let lexicon = Lexicon::from_slice(&["slate", "crane", "SLATE", "crane"]);
        assert_eq!(texts(&lexicon), ["SLATE", "CRANE"]);
    }

    #[test]
    fn merge_appends_only_new_words() {
        let mut lexicon = Lexicon::from_slice(&["crane", "slate"]);
        let added = lexicon.merge([
            Word::new("slate").unwrap(),
            Word::new("xylyl").unwrap(),
        ]);

        assert_eq!(added, 1);
        assert_eq!(texts(&lexicon), ["CRANE", "SLATE", "XYLYL"]);
        assert!(lexicon.contains(&Word::new("xylyl").unwrap()));
    }

    #[test]
    fn choose_random_returns_member() {
        let lexicon = Lexicon::from_slice(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = lexicon.choose_random(&mut rng).unwrap();
            assert!(lexicon.contains(word));
        }
    }

    #[test]
    fn choose_random_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(Lexicon::new().choose_random(&mut rng).is_none());
    }
}
