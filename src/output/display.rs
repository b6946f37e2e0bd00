//! Display functions for game state and command results

use super::formatters::{alphabet_status, feedback_tiles, spaced};
use crate::commands::BenchmarkResult;
use crate::core::{ALPHABET, Word, letter_index};
use crate::solver::{Game, KnowledgeState, Valuator, letter_frequencies};
use colored::Colorize;
use std::io::{self, Write};

/// Candidate lists shorter than this are printed in full
pub const LIST_THRESHOLD: usize = 20;

/// Number of valued guesses shown in the report
pub const TOP_GUESSES: usize = 4;

/// Print the size of the starting list and its most common letters
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_opening<W: Write>(out: &mut W, knowledge: &KnowledgeState) -> io::Result<()> {
    let candidates = knowledge.candidates();
    writeln!(out, "There are {} possible words.", candidates.len())?;
    writeln!(
        out,
        "Most likely letters: {}",
        letter_frequencies(candidates, knowledge.known_present())
    )
}

/// Print the guesses so far, the latest one beside the alphabet status row
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let Some(((last_guess, last_feedback), earlier)) = game.history().split_last() else {
        return Ok(());
    };

    writeln!(out)?;
    for (guess, feedback) in earlier {
        writeln!(out, "{}", spaced(guess.text()))?;
        writeln!(out, "{}", spaced(&feedback.to_string()))?;
        writeln!(out)?;
    }

    let alphabet: String = ALPHABET.iter().map(|&l| char::from(l)).collect();
    let knowledge = game.knowledge();
    writeln!(
        out,
        "{}     {}",
        spaced(last_guess.text()),
        spaced(&alphabet)
    )?;
    writeln!(
        out,
        "{}     {}",
        spaced(&last_feedback.to_string()),
        spaced(&alphabet_status(knowledge))
    )?;
    writeln!(out, "{}", feedback_tiles(last_guess, last_feedback))
}

/// Print what is known and what the valuator recommends
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_state_report<W: Write>(
    out: &mut W,
    knowledge: &KnowledgeState,
    valuator: &Valuator,
) -> io::Result<()> {
    let candidates = knowledge.candidates();
    writeln!(out)?;

    if candidates.is_empty() {
        writeln!(
            out,
            "{}",
            "No possibilities remain: the word lists and the feedback disagree."
                .red()
                .bold()
        )?;
        return Ok(());
    }

    writeln!(out, "List of possibilities has {} items", candidates.len())?;
    if candidates.len() < LIST_THRESHOLD {
        writeln!(out, "{}", join_words(candidates.iter()))?;
    }

    let known = knowledge.known_present().union(knowledge.known_absent());
    writeln!(
        out,
        "Most likely remaining letters: {}",
        letter_frequencies(candidates, known)
    )?;
    writeln!(out, "Most valued letters: {}", valuator.ranked_letters(knowledge))?;

    let top = valuator.rank_candidates(candidates, knowledge);
    writeln!(
        out,
        "Most valued guesses: {}",
        join_words(top.into_iter().take(TOP_GUESSES))
    )?;

    let values = valuator.letter_values(knowledge);
    let valued: Vec<String> = ALPHABET
        .iter()
        .filter(|&&l| values[letter_index(l)] >= 1)
        .map(|&l| format!("{}:{}", char::from(l), values[letter_index(l)]))
        .collect();
    writeln!(out, "Letter values: {}", valued.join(" "))?;

    writeln!(out, "Letters known yes: {}", knowledge.known_present())?;
    writeln!(out, "Letters known not: {}", knowledge.known_absent())?;

    let multiples: Vec<String> = ALPHABET
        .iter()
        .filter(|&&l| knowledge.min_count(l) > 1)
        .map(|&l| format!("{}:{}", char::from(l), knowledge.min_count(l)))
        .collect();
    if !multiples.is_empty() {
        writeln!(out, "Multiple letters: {}", multiples.join(" "))?;
    }
    Ok(())
}

/// Print the closing line of a solved game
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_solved<W: Write>(out: &mut W, guesses: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Solved in {guesses} guesses.")
}

fn join_words<'a, I: Iterator<Item = &'a Word>>(words: I) -> String {
    words.map(Word::text).collect::<Vec<_>>().join(" ")
}

/// Print a self-play summary: outcome counts, then one bar per guess count
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_benchmark_result<W: Write>(out: &mut W, result: &BenchmarkResult) -> io::Result<()> {
    let rule = "─".repeat(50);
    writeln!(out, "\n{}", rule.cyan())?;
    writeln!(
        out,
        "Self-play over {} solutions",
        result.total_words.to_string().bold()
    )?;
    writeln!(out, "{}", rule.cyan())?;

    let flag = |count: usize| {
        if count == 0 {
            count.to_string().green()
        } else {
            count.to_string().red().bold()
        }
    };
    writeln!(
        out,
        "Guesses per game:  {:.2} (fewest {}, most {})",
        result.average_guesses, result.min_guesses, result.max_guesses
    )?;
    writeln!(out, "Ran out of words:  {}", flag(result.exhausted))?;
    writeln!(out, "Solution pruned:   {}", flag(result.violations))?;
    writeln!(
        out,
        "Elapsed:           {:.2}s ({:.1} games/s)",
        result.duration.as_secs_f64(),
        result.words_per_second
    )?;

    if result.total_words == 0 {
        return Ok(());
    }

    writeln!(out)?;
    let widest = result.distribution.values().copied().max().unwrap_or(0).max(1);
    for (&guesses, &games) in &result.distribution {
        let width = games * BAR_WIDTH / widest;
        let share = games as f64 * 100.0 / result.total_words as f64;
        writeln!(
            out,
            "{guesses:>3} | {:<BAR_WIDTH$} {games} ({share:.1}%)",
            "#".repeat(width).green()
        )?;
    }
    Ok(())
}

/// Width of the longest distribution bar
const BAR_WIDTH: usize = 40;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Lexicon;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn opening_reports_list_size() {
        let lexicon = Lexicon::from_slice(&["crane", "crate", "grate"]);
        let knowledge = KnowledgeState::from_lexicon(&lexicon);

        let text = render(|out| write_opening(out, &knowledge));
        assert!(text.contains("There are 3 possible words."));
        assert!(text.contains("Most likely letters: AERCTGN"));
    }

    #[test]
    fn board_is_empty_before_first_guess() {
        let lexicon = Lexicon::from_slice(&["crane", "react"]);
        let game = Game::new(word("react"), &lexicon);

        assert!(render(|out| write_board(out, &game)).is_empty());
    }

    #[test]
    fn board_shows_history_and_alphabet() {
        let lexicon = Lexicon::from_slice(&["crane", "react", "slate"]);
        let mut game = Game::new(word("react"), &lexicon);
        game.play(&word("slate")).unwrap();
        game.play(&word("crane")).unwrap();

        let text = render(|out| write_board(out, &game));
        assert!(text.contains("S L A T E\n"));
        assert!(text.contains("C R A N E     A B C D E"));
        assert!(text.contains("? ? * - ?     "));
    }

    #[test]
    fn state_report_lists_small_candidate_sets() {
        let lexicon = Lexicon::from_slice(&["crane", "crate", "grate", "irate", "slate"]);
        let mut game = Game::new(word("grate"), &lexicon);
        game.play(&word("slate")).unwrap();

        let text = render(|out| write_state_report(out, game.knowledge(), &Valuator::default()));
        assert!(text.contains("List of possibilities has 3 items"));
        assert!(text.contains("CRATE GRATE IRATE"));
        assert!(text.contains("Letters known yes: AET"));
        assert!(text.contains("Letters known not: LS"));
        assert!(text.contains("Most valued guesses: "));
        assert!(!text.contains("Multiple letters"));
    }

    #[test]
    fn state_report_shows_repeated_letters() {
        let lexicon = Lexicon::from_slice(&["geese", "eerie", "crane"]);
        let mut game = Game::new(word("geese"), &lexicon);
        game.play(&word("eerie")).unwrap();

        let text = render(|out| write_state_report(out, game.knowledge(), &Valuator::default()));
        assert!(text.contains("Multiple letters: E:3"));
    }

    #[test]
    fn state_report_flags_exhaustion() {
        let knowledge = KnowledgeState::new(Vec::new());
        let text = render(|out| write_state_report(out, &knowledge, &Valuator::default()));
        assert!(text.contains("No possibilities remain"));
    }

    #[test]
    fn benchmark_summary_lists_each_guess_count() {
        use crate::commands::{GameRecord, summarize};
        use crate::solver::GameStatus;
        use std::time::Duration;

        let record = |text: &str, guesses, status| GameRecord {
            solution: word(text),
            guesses,
            status,
            lost_solution: false,
        };
        let result = summarize(
            &[
                record("crane", 2, GameStatus::Solved),
                record("slate", 3, GameStatus::Solved),
                record("react", 3, GameStatus::Solved),
                record("irate", 4, GameStatus::Exhausted),
            ],
            Duration::from_millis(10),
        );

        let text = render(|out| write_benchmark_result(out, &result));
        assert!(text.contains("Self-play over "));
        assert!(text.contains("Guesses per game:  3.00 (fewest 2, most 4)"));
        assert!(text.contains(" 1 (25.0%)"));
        assert!(text.contains(" 2 (50.0%)"));
        assert!(text.contains("  2 | "));
        assert!(text.contains("  3 | "));
        assert!(!text.contains("  4 | "));
    }

    #[test]
    fn solved_line() {
        let text = render(|out| write_solved(out, 3));
        assert_eq!(text, "\nSolved in 3 guesses.\n");
    }
}
