use wordle_engine::core::{ALPHABET, Feedback, Mark, Word};
use wordle_engine::solver::{
    Game, GameStatus, KnowledgeState, LetterStatus, Valuator, is_consistent, prune,
};
use wordle_engine::wordlists::Lexicon;

const LIST: &[&str] = &[
    "crane", "react", "trace", "caret", "slate", "arise", "raise", "allow", "llama", "abase",
    "sassy", "eerie", "geese", "robot", "floor", "speed", "erase",
];

fn lexicon() -> Lexicon {
    Lexicon::from_slice(LIST)
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn apply(knowledge: &mut KnowledgeState, solution: &Word, guess: &Word) -> Feedback {
    let feedback = Feedback::evaluate(solution, guess);
    knowledge.update(guess, &feedback).unwrap();
    feedback
}

#[test]
fn solution_survives_every_two_guess_sequence() {
    let lexicon = lexicon();

    for solution in &lexicon {
        for first in &lexicon {
            for second in &lexicon {
                let mut knowledge = KnowledgeState::from_lexicon(&lexicon);
                for guess in [first, second] {
                    apply(&mut knowledge, solution, guess);
                    knowledge.prune();
                    assert!(
                        knowledge.candidates().contains(solution),
                        "{solution} lost after {first} {second}"
                    );
                }
            }
        }
    }
}

#[test]
fn updates_never_widen_the_candidate_set() {
    let lexicon = lexicon();

    for solution in &lexicon {
        let mut knowledge = KnowledgeState::from_lexicon(&lexicon);
        let mut previous = prune(lexicon.words(), &knowledge).len();

        for guess in &lexicon {
            apply(&mut knowledge, solution, guess);
            let current = prune(lexicon.words(), &knowledge).len();
            assert!(current <= previous, "{solution}: {guess} widened the set");
            previous = current;
        }
    }
}

#[test]
fn pruning_is_idempotent() {
    let lexicon = lexicon();

    for solution in &lexicon {
        for guess in &lexicon {
            let mut knowledge = KnowledgeState::new(Vec::new());
            apply(&mut knowledge, solution, guess);

            let once = prune(lexicon.words(), &knowledge);
            let twice = prune(&once, &knowledge);
            assert_eq!(once, twice);
            assert!(once.iter().all(|w| is_consistent(w, &knowledge)));
        }
    }
}

#[test]
fn min_count_never_decreases() {
    let lexicon = lexicon();

    for solution in &lexicon {
        let mut knowledge = KnowledgeState::from_lexicon(&lexicon);
        let mut previous = [0usize; 26];

        for guess in &lexicon {
            apply(&mut knowledge, solution, guess);
            for (i, &letter) in ALPHABET.iter().enumerate() {
                let count = knowledge.min_count(letter);
                assert!(count >= previous[i]);
                assert!(count <= solution.count_of(letter));
                previous[i] = count;
            }
        }
    }
}

#[test]
fn duplicate_letters_are_bounded_by_the_solution() {
    let feedback = Feedback::evaluate(&word("arise"), &word("raise"));
    assert_eq!(
        feedback.marks(),
        &[Mark::Partial, Mark::Partial, Mark::Hit, Mark::Hit, Mark::Hit]
    );

    // ALLOW has two L and one A
    let feedback = Feedback::evaluate(&word("allow"), &word("llama"));
    assert_eq!(feedback.to_string(), "?*?--");
    let l_marks = [0, 1, 2]
        .iter()
        .filter(|&&i| word("llama").letter_at(i) == b'L' && feedback.mark_at(i).is_present())
        .count();
    assert_eq!(l_marks, 2);
}

#[test]
fn crane_against_react() {
    let feedback = Feedback::evaluate(&word("react"), &word("crane"));
    assert_eq!(
        feedback.marks(),
        &[Mark::Partial, Mark::Partial, Mark::Hit, Mark::Miss, Mark::Partial]
    );
}

#[test]
fn matched_letter_is_never_globally_absent() {
    let lexicon = lexicon();
    let mut knowledge = KnowledgeState::from_lexicon(&lexicon);
    apply(&mut knowledge, &word("abase"), &word("sassy"));
    knowledge.prune();

    assert_ne!(knowledge.status(b'S'), LetterStatus::Miss);
    assert!(knowledge.status(b'S').is_present());
    assert!(!knowledge.known_absent().contains(b'S'));
    assert!(knowledge.candidates().contains(&word("abase")));
}

#[test]
fn guessing_the_solution_solves() {
    let lexicon = lexicon();

    for solution in &lexicon {
        assert!(Feedback::evaluate(solution, solution).is_solved());

        let mut game = Game::new(solution.clone(), &lexicon);
        let turn = game.play(solution).unwrap();
        assert_eq!(turn.status, GameStatus::Solved);
        assert_eq!(game.knowledge().candidates(), std::slice::from_ref(solution));
    }
}

#[test]
fn computer_play_terminates_within_list_size() {
    let lexicon = lexicon();
    let valuator = Valuator::default();

    for solution in &lexicon {
        let mut game = Game::new(solution.clone(), &lexicon);
        while game.status() == GameStatus::InProgress {
            let turn = game.play_suggested(&valuator).unwrap().unwrap();
            assert!(turn.solution_retained);
        }
        assert_eq!(game.status(), GameStatus::Solved);
        assert!(game.turns_taken() <= lexicon.len());
    }
}

#[test]
fn concurrent_games_keep_separate_knowledge() {
    let lexicon = lexicon();
    let mut first = Game::new(word("crane"), &lexicon);
    let second = Game::new(word("robot"), &lexicon);

    first.play(&word("slate")).unwrap();
    assert!(first.knowledge().candidates().len() < lexicon.len());
    assert_eq!(second.knowledge().candidates().len(), lexicon.len());
    assert_eq!(second.knowledge().updates(), 0);
}
