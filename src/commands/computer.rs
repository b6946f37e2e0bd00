//! Computer guesser mode
//!
//! The player supplies a solution and watches the valuator find it.

use super::console::Console;
use super::report_turn;
use crate::core::Word;
use crate::output::display::write_opening;
use crate::solver::{Game, GameStatus, Valuator};
use crate::wordlists::Lexicon;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Ask for a solution and let the valuator play it out
///
/// An out-of-dictionary solution, once confirmed, stays in `dictionary` for
/// the rest of the session. Returns the finished game, or `None` if input
/// ended before a solution was given.
///
/// # Errors
///
/// Returns an error on console I/O failure or if the knowledge state
/// rejects evaluated feedback.
pub fn run_computer<R, W>(
    console: &mut Console<R, W>,
    dictionary: &mut Lexicon,
    valuator: &Valuator,
) -> Result<Option<Game>>
where
    R: BufRead,
    W: Write,
{
    let Some(solution) = console.request_solution(dictionary)? else {
        return Ok(None);
    };
    Ok(Some(play_out(console.output(), solution, dictionary, valuator)?))
}

/// Let the valuator guess `solution` over `dictionary`, reporting each turn
///
/// # Errors
///
/// Returns an error if writing fails or the knowledge state rejects
/// evaluated feedback.
pub fn play_out<W: Write>(
    out: &mut W,
    solution: Word,
    dictionary: &Lexicon,
    valuator: &Valuator,
) -> Result<Game> {
    let mut game = Game::new(solution, dictionary);
    write_opening(out, game.knowledge())?;

    while game.status() == GameStatus::InProgress {
        let Some(guess) = valuator
            .best_guess(game.knowledge().candidates(), game.knowledge())
            .cloned()
        else {
            break;
        };
        writeln!(out, "\n--------------------------\nI guess: {guess}\n")?;

        let turn = game.play(&guess)?;
        report_turn(out, &game, &turn, valuator)?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Lexicon {
        Lexicon::from_slice(&["crane", "slate", "irate", "crate", "grate", "react"])
    }

    #[test]
    fn computer_finds_dictionary_word() {
        let mut dictionary = dictionary();
        let mut console = Console::new(Cursor::new(b"grate\n".to_vec()), Vec::new());

        let game = run_computer(&mut console, &mut dictionary, &Valuator::default())
            .unwrap()
            .unwrap();
        assert_eq!(game.status(), GameStatus::Solved);
        assert_eq!(game.history().last().map(|(w, _)| w.text()), Some("GRATE"));

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.contains("There are 6 possible words."));
        assert!(text.contains("I guess: "));
        assert!(text.contains(&format!("Solved in {} guesses.", game.turns_taken())));
    }

    #[test]
    fn confirmed_unknown_word_joins_dictionary() {
        let mut dictionary = dictionary();
        let mut console = Console::new(Cursor::new(b"xylyl\nY\n".to_vec()), Vec::new());

        let game = run_computer(&mut console, &mut dictionary, &Valuator::default())
            .unwrap()
            .unwrap();
        assert_eq!(game.status(), GameStatus::Solved);
        assert_eq!(dictionary.len(), 7);
    }

    #[test]
    fn no_solution_at_eof() {
        let mut dictionary = dictionary();
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());

        let game = run_computer(&mut console, &mut dictionary, &Valuator::default()).unwrap();
        assert!(game.is_none());
    }

    #[test]
    fn every_solution_is_found() {
        let dictionary = dictionary();
        for solution in &dictionary {
            let mut out = Vec::new();
            let game = play_out(&mut out, solution.clone(), &dictionary, &Valuator::default())
                .unwrap();
            assert_eq!(game.status(), GameStatus::Solved);
            assert!(game.turns_taken() <= dictionary.len());
        }
    }
}
