//! Human guesser mode
//!
//! The program hides a random solution and reports what each guess reveals.

use super::console::Console;
use super::report_turn;
use crate::output::display::write_opening;
use crate::solver::{Game, GameStatus, Valuator};
use crate::wordlists::Lexicon;
use anyhow::{Result, bail};
use rand::Rng;
use std::io::{BufRead, Write};

/// Play games until the player declines another or input ends
///
/// Returns the number of games solved.
///
/// # Errors
///
/// Returns an error on console I/O failure, on an empty solutions list, or
/// if the knowledge state rejects evaluated feedback.
pub fn run_human<R, W, G>(
    console: &mut Console<R, W>,
    solutions: &Lexicon,
    dictionary: &Lexicon,
    valuator: &Valuator,
    rng: &mut G,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut solved = 0;

    loop {
        let Some(solution) = solutions.choose_random(rng) else {
            bail!("The solutions list is empty");
        };
        log::debug!("Solution chosen: {solution}");

        let mut session = dictionary.clone();
        session.merge([solution.clone()]);
        let mut game = Game::new(solution.clone(), &session);
        write_opening(console.output(), game.knowledge())?;

        while game.status() != GameStatus::Solved {
            let Some(guess) = console.request_guess(&session)? else {
                return Ok(solved);
            };
            let turn = game.play(&guess)?;
            report_turn(console.output(), &game, &turn, valuator)?;
        }
        solved += 1;

        if !console.confirm("Play again? ")? {
            return Ok(solved);
        }
    }
}
