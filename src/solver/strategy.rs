//! Guess selection strategies
//!
//! Defines the Strategy trait used by the computer guesser.

use super::knowledge::KnowledgeState;
use super::valuator::Valuator;
use crate::core::Word;

/// A strategy for picking the next guess
pub trait Strategy {
    /// Select the best guess from the pool given what is known
    ///
    /// Returns `None` if the pool is empty.
    fn select_guess<'a>(&self, guess_pool: &'a [Word], knowledge: &KnowledgeState)
    -> Option<&'a Word>;
}

impl Strategy for Valuator {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        knowledge: &KnowledgeState,
    ) -> Option<&'a Word> {
        self.best_guess(guess_pool, knowledge)
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        knowledge: &KnowledgeState,
    ) -> Option<&'a Word> {
        (**self).select_guess(guess_pool, knowledge)
    }
}
