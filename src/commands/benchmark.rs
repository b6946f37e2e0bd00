//! Benchmark command
//!
//! Lets the computer play every solution and tallies the outcomes.

use crate::core::Word;
use crate::solver::{Game, GameStatus, KnowledgeError, Valuator};
use crate::wordlists::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of one self-played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    pub guesses: usize,
    pub status: GameStatus,
    /// Some turn pruned the solution away
    pub lost_solution: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub exhausted: usize,
    pub violations: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play one game to the end with the valuator
///
/// # Errors
///
/// Returns `KnowledgeError` if the knowledge state rejects evaluated
/// feedback.
pub fn play_game(
    solution: &Word,
    dictionary: &Lexicon,
    valuator: &Valuator,
) -> Result<GameRecord, KnowledgeError> {
    let mut game = Game::new(solution.clone(), dictionary);
    let mut lost_solution = false;

    while game.status() == GameStatus::InProgress {
        let Some(turn) = game.play_suggested(valuator)? else {
            break;
        };
        lost_solution |= !turn.solution_retained;
    }

    Ok(GameRecord {
        solution: solution.clone(),
        guesses: game.turns_taken(),
        status: game.status(),
        lost_solution,
    })
}

/// Run the valuator against the first `limit` solutions, in parallel
///
/// Every game owns its knowledge; only `dictionary` is shared.
///
/// # Errors
///
/// Returns the first `KnowledgeError` raised by any game.
pub fn run_benchmark(
    solutions: &[Word],
    dictionary: &Lexicon,
    valuator: &Valuator,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<BenchmarkResult, KnowledgeError> {
    let targets = &solutions[..limit.map_or(solutions.len(), |n| n.min(solutions.len()))];
    log::info!("Benchmarking {} solutions", targets.len());

    let pb = if show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let records: Vec<GameRecord> = targets
        .par_iter()
        .map(|solution| {
            let record = play_game(solution, dictionary, valuator);
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&records, start.elapsed()))
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(err) => log::debug!("Falling back to the default progress style: {err}"),
    }
    pb
}

/// Tally game records
#[must_use]
pub fn summarize(records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut exhausted = 0;
    let mut violations = 0;

    for record in records {
        match record.status {
            GameStatus::Solved => *distribution.entry(record.guesses).or_insert(0) += 1,
            GameStatus::Exhausted | GameStatus::InProgress => exhausted += 1,
        }
        if record.lost_solution {
            violations += 1;
        }
    }

    let total_words = records.len();
    let total_guesses: usize = records.iter().map(|r| r.guesses).sum();
    let min_guesses = records.iter().map(|r| r.guesses).min().unwrap_or(0);
    let max_guesses = records.iter().map(|r| r.guesses).max().unwrap_or(0);
    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        exhausted,
        violations,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    }
}
