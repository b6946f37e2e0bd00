//! Wordle Engine
//!
//! Feedback evaluation, knowledge tracking, candidate pruning and a
//! letter-value guesser for five-letter word games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, Word};
//! use wordle_engine::solver::{KnowledgeState, Valuator};
//! use wordle_engine::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::from_slice(&["crane", "react", "trace", "slate"]);
//! let mut knowledge = KnowledgeState::from_lexicon(&lexicon);
//!
//! let solution = Word::new("react").unwrap();
//! let guess = Word::new("crane").unwrap();
//! let feedback = Feedback::evaluate(&solution, &guess);
//! assert_eq!(feedback.to_string(), "??*-?");
//!
//! knowledge.update(&guess, &feedback).unwrap();
//! knowledge.prune();
//! assert_eq!(knowledge.candidates().len(), 1);
//!
//! let next = Valuator::default().best_guess(knowledge.candidates(), &knowledge);
//! assert_eq!(next, Some(&solution));
//! ```

// Core domain types
pub mod core;

// Knowledge, pruning and guessing
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
