//! Word list loading
//!
//! Plain-text lists, one word per line. Blank lines and lines starting with
//! `#` are ignored; anything else that is not exactly 5 letters is reported
//! and skipped. Loading always continues past a bad line.

use super::Lexicon;
use crate::core::{Word, WordError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no valid words", .0.display())]
    Empty(PathBuf),
}

/// A line that was neither a word nor a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: WordError,
}

/// Result of parsing a word list
#[derive(Debug, Clone, Default)]
pub struct ParsedList {
    pub lexicon: Lexicon,
    pub rejected: Vec<RejectedLine>,
    pub duplicates: usize,
}

/// Parse a word list from any buffered reader
///
/// `source` names the list in diagnostics.
///
/// # Errors
///
/// Returns an I/O error if reading from `reader` fails.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::parse_word_list;
///
/// let text = "# five letter words\ncrane\n\nslate\nnope\n";
/// let parsed = parse_word_list(text.as_bytes(), "inline").unwrap();
/// assert_eq!(parsed.lexicon.len(), 2);
/// assert_eq!(parsed.rejected.len(), 1);
/// ```
pub fn parse_word_list<R: BufRead>(reader: R, source: &str) -> io::Result<ParsedList> {
    let mut parsed = ParsedList::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if is_ignorable(trimmed) {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => {
                if !parsed.lexicon.insert(word) {
                    parsed.duplicates += 1;
                }
            }
            Err(reason) => {
                log::warn!(
                    "Word {} rejected from list in {source} (line {}): {reason}",
                    trimmed.to_uppercase(),
                    idx + 1
                );
                parsed.rejected.push(RejectedLine {
                    line: idx + 1,
                    text: trimmed.to_string(),
                    reason,
                });
            }
        }
    }

    if parsed.duplicates > 0 {
        log::debug!("{source}: skipped {} duplicate words", parsed.duplicates);
    }

    Ok(parsed)
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or read, and
/// `LoadError::Empty` if it holds no valid words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LoadError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let parsed =
        parse_word_list(BufReader::new(file), &path.display().to_string()).map_err(io_error)?;

    if parsed.lexicon.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    log::info!(
        "Loaded {} words from {} ({} rejected)",
        parsed.lexicon.len(),
        path.display(),
        parsed.rejected.len()
    );

    Ok(parsed.lexicon)
}

fn is_ignorable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#')
}
