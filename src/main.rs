//! Wordle - CLI
//!
//! Either the computer hides a word and you guess, or you hide a word and
//! the computer guesses.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use wordle_engine::{
    commands::{Console, is_human_guesser, run_benchmark, run_computer, run_human},
    output::write_benchmark_result,
    solver::{Valuator, ValuatorConfig},
    wordlists::{DEFAULT_DICTIONARY_FILE, DEFAULT_SOLUTIONS_FILE, Lexicon, load_from_file},
};

/// Upper bound for the valuator tuning options
const MAX_TUNING: i64 = 1000;

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Play Wordle against the computer, or watch it play",
    version,
    author
)]
struct Cli {
    /// Who guesses: any prefix of HUMAN (e.g. 'h') for you, anything else for the computer
    mode: Option<String>,

    /// Word list the hidden solution is drawn from
    #[arg(short, long, default_value = DEFAULT_SOLUTIONS_FILE)]
    solutions: PathBuf,

    /// Word list of acceptable guesses
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_FILE)]
    dictionary: PathBuf,

    /// Weight of already-known occurrences when valuing a letter
    #[arg(
        long,
        default_value_t = ValuatorConfig::default().known_count_weight,
        value_parser = clap::value_parser!(i64).range(0..=MAX_TUNING)
    )]
    known_weight: i64,

    /// Multiplier for a letter's value on its repeated occurrences in a guess
    #[arg(
        long,
        default_value_t = ValuatorConfig::default().multi_penalty,
        value_parser = clap::value_parser!(i64).range(0..=MAX_TUNING)
    )]
    multi_penalty: i64,

    /// Let the computer play every solution and report statistics
    #[arg(short, long)]
    benchmark: bool,

    /// Limit the benchmark to the first N solutions
    #[arg(short, long, requires = "benchmark")]
    limit: Option<usize>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_list(path: &Path, role: &str) -> Result<Lexicon> {
    load_from_file(path).with_context(|| format!("Failed to load the {role} list"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wordle_engine::log::init_logger(cli.verbose);

    let valuator = Valuator::new(ValuatorConfig {
        known_count_weight: cli.known_weight,
        multi_penalty: cli.multi_penalty,
    });
    log::debug!("Valuator config: {:?}", valuator.config());

    let solutions = load_list(&cli.solutions, "solutions")?;
    let mut dictionary = load_list(&cli.dictionary, "dictionary")?;

    if cli.benchmark {
        let result = run_benchmark(solutions.words(), &dictionary, &valuator, cli.limit, true)?;
        write_benchmark_result(&mut io::stdout().lock(), &result)?;
        if result.violations > 0 {
            log::error!("{} games lost their solution", result.violations);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if is_human_guesser(cli.mode.as_deref()) {
        let solved = run_human(
            &mut console,
            &solutions,
            &dictionary,
            &valuator,
            &mut rand::rng(),
        )?;
        log::debug!("Games solved this session: {solved}");
    } else {
        run_computer(&mut console, &mut dictionary, &valuator)?;
    }
    Ok(())
}
