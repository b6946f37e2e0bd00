//! Line-oriented prompts over any reader/writer pair

use crate::core::Word;
use crate::wordlists::Lexicon;
use std::io::{self, BufRead, Write};

/// Prompting console
///
/// Every read returns `Ok(None)` at end of input so that callers can wind
/// down cleanly instead of looping on an empty stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for reports between prompts
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one trimmed line
    ///
    /// # Errors
    ///
    /// Returns any I/O error from either stream.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question; anything starting with `Y` is yes
    ///
    /// # Errors
    ///
    /// Returns any I/O error from either stream.
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        Ok(self
            .prompt(message)?
            .is_some_and(|answer| answer.to_uppercase().starts_with('Y')))
    }

    /// Read guesses until one is a dictionary word
    ///
    /// # Errors
    ///
    /// Returns any I/O error from either stream.
    pub fn request_guess(&mut self, dictionary: &Lexicon) -> io::Result<Option<Word>> {
        loop {
            let Some(text) = self.prompt("Guess: ")? else {
                return Ok(None);
            };
            match Word::new(&text) {
                Ok(word) if dictionary.contains(&word) => return Ok(Some(word)),
                _ => writeln!(
                    self.output,
                    "Word '{}' not in dictionary.",
                    text.to_uppercase()
                )?,
            }
        }
    }

    /// Read the word the computer has to find
    ///
    /// A well-formed word outside the dictionary is accepted after
    /// confirmation and merged into `dictionary`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from either stream.
    pub fn request_solution(&mut self, dictionary: &mut Lexicon) -> io::Result<Option<Word>> {
        loop {
            let Some(text) = self.prompt("What word will be the solution? ")? else {
                return Ok(None);
            };
            let word = match Word::new(&text) {
                Ok(word) => word,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            if dictionary.contains(&word) {
                return Ok(Some(word));
            }
            if self.confirm("Word not in dictionary.  Use it anyway? ")? {
                writeln!(
                    self.output,
                    "OK.  I'll add your word to the dictionary for this session."
                )?;
                log::debug!("Adding {word} to the session dictionary");
                dictionary.merge([word.clone()]);
                return Ok(Some(word));
            }
        }
    }
}
