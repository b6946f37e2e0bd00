//! Knowledge accumulation, candidate pruning and guess ranking
//!
//! Data flows one way per guess: evaluate, [`KnowledgeState::update`],
//! [`prune`], then rank the survivors with the [`Valuator`].

pub mod frequency;
mod game;
mod knowledge;
mod prune;
pub mod strategy;
mod valuator;

pub use frequency::letter_frequencies;
pub use game::{Game, GameStatus, Turn};
pub use knowledge::{KnowledgeError, KnowledgeState, LetterStatus};
pub use prune::{is_consistent, prune};
pub use strategy::Strategy;
pub use valuator::{LetterValues, Valuator, ValuatorConfig};
