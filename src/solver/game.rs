//! One game against a hidden solution
//!
//! Ties the evaluator, knowledge state and pruner together: each guess is
//! evaluated, folded into the knowledge, and the candidates are pruned.

use super::knowledge::{KnowledgeError, KnowledgeState};
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use crate::wordlists::Lexicon;

/// Where a game stands after its latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The last guess was the solution
    Solved,
    /// No candidate is left and the solution was not guessed
    Exhausted,
}

/// Record of a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// 1-based turn number
    pub number: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// False if pruning dropped the solution; always a defect
    pub solution_retained: bool,
    pub status: GameStatus,
}

/// Main game state
///
/// Owns its knowledge and candidate list; the lexicon it was built from is
/// only read.
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    knowledge: KnowledgeState,
    history: Vec<(Word, Feedback)>,
    status: GameStatus,
}

impl Game {
    /// Start a game over a private copy of `lexicon`
    ///
    /// A solution missing from the lexicon is appended to the copy so that
    /// it can be reached.
    #[must_use]
    pub fn new(solution: Word, lexicon: &Lexicon) -> Self {
        let mut candidates = lexicon.words().to_vec();
        if !lexicon.contains(&solution) {
            candidates.push(solution.clone());
        }

        Self {
            solution,
            knowledge: KnowledgeState::new(candidates),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Play one guess
    ///
    /// # Errors
    ///
    /// Returns `KnowledgeError` if the knowledge rejects the evaluated
    /// feedback. The evaluator never produces contradictory feedback for a
    /// fixed solution, so this is an internal defect.
    pub fn play(&mut self, guess: &Word) -> Result<Turn, KnowledgeError> {
        let feedback = Feedback::evaluate(&self.solution, guess);
        let candidates_before = self.knowledge.candidates().len();
        let was_candidate = self.is_candidate(&self.solution);

        self.knowledge.update(guess, &feedback).inspect_err(|err| {
            log::error!("Knowledge rejected evaluated feedback: {err}");
        })?;
        self.knowledge.prune();
        self.history.push((guess.clone(), feedback));

        let solution_retained = self.is_candidate(&self.solution);
        if was_candidate && !solution_retained {
            log::error!(
                "Solution {} no longer among the candidates after {guess} {feedback}",
                self.solution
            );
        }

        self.status = if feedback.is_solved() {
            GameStatus::Solved
        } else if self.knowledge.is_exhausted() {
            log::warn!("No candidates remain after {guess} {feedback}");
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        };

        Ok(Turn {
            number: self.history.len(),
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after: self.knowledge.candidates().len(),
            solution_retained,
            status: self.status,
        })
    }

    /// Let `strategy` pick a guess from the remaining candidates and play it
    ///
    /// Returns `Ok(None)` when there is nothing left to guess.
    ///
    /// # Errors
    ///
    /// See [`Game::play`].
    pub fn play_suggested<S: Strategy>(
        &mut self,
        strategy: &S,
    ) -> Result<Option<Turn>, KnowledgeError> {
        let Some(guess) = strategy
            .select_guess(self.knowledge.candidates(), &self.knowledge)
            .cloned()
        else {
            return Ok(None);
        };
        self.play(&guess).map(Some)
    }

    fn is_candidate(&self, word: &Word) -> bool {
        self.knowledge.candidates().contains(word)
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeState {
        &self.knowledge
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }
}
