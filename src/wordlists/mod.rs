//! Word lists
//!
//! An ordered, duplicate-free [`Lexicon`] and the plain-text loader that
//! fills it.

mod lexicon;
pub mod loader;

pub use lexicon::Lexicon;
pub use loader::{LoadError, ParsedList, RejectedLine, load_from_file, parse_word_list};

/// Default file the random solution is drawn from
pub const DEFAULT_SOLUTIONS_FILE: &str = "wordle-solutions-list.txt";

/// Default file of guessable words
pub const DEFAULT_DICTIONARY_FILE: &str = "wordle-dictionary.txt";
