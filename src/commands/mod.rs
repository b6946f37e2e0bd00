//! Command implementations

pub mod benchmark;
pub mod computer;
pub mod console;
pub mod human;

pub use benchmark::{BenchmarkResult, GameRecord, play_game, run_benchmark, summarize};
pub use computer::{play_out, run_computer};
pub use console::Console;
pub use human::run_human;

use crate::output::display::{write_board, write_solved, write_state_report};
use crate::solver::{Game, GameStatus, Turn, Valuator};
use colored::Colorize;
use std::io::{self, Write};

/// Mode name selecting the human guesser
const HUMAN_MODE: &str = "HUMAN";

/// Whether the mode argument asks for the human to guess
///
/// Any non-empty prefix of `HUMAN`, in any case, selects the human; anything
/// else, including no argument, leaves the guessing to the computer.
#[must_use]
pub fn is_human_guesser(mode: Option<&str>) -> bool {
    mode.is_some_and(|arg| !arg.is_empty() && HUMAN_MODE.starts_with(&arg.to_uppercase()))
}

/// Print the board and either the solved line or the state report
fn report_turn<W: Write>(
    out: &mut W,
    game: &Game,
    turn: &Turn,
    valuator: &Valuator,
) -> io::Result<()> {
    write_board(out, game)?;
    if !turn.solution_retained {
        writeln!(
            out,
            "{}",
            "Have a problem! The solution is no longer among the possibilities."
                .red()
                .bold()
        )?;
    }

    match turn.status {
        GameStatus::Solved => write_solved(out, turn.number),
        GameStatus::InProgress | GameStatus::Exhausted => {
            write_state_report(out, game.knowledge(), valuator)
        }
    }
}
