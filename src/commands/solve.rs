//! Self-play solving
//!
//! Plays a game against a known secret, taking the top suggestion every turn
//! and scoring it with the feedback oracle.

use crate::core::{Feedback, Word};
use crate::solver::{ScoreCalculator, Session, ValidationError};
use log::debug;

/// Result of solving a word
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` from a fresh game, giving up after `max_guesses`
///
/// `forced_first` replaces the first suggestion when given.
///
/// # Errors
///
/// Returns `ValidationError::MalformedWord` for an invalid target and
/// `ValidationError::UnknownWord` if the target or the forced opener is not in
/// the session's word bank.
pub fn solve_word<S: ScoreCalculator>(
    session: &mut Session<S>,
    target: &str,
    max_guesses: usize,
    forced_first: Option<&Word>,
) -> Result<SolveResult, ValidationError> {
    let target_word = Word::new(target)?;
    if !session.candidates().dictionary().contains(target_word.text()) {
        return Err(ValidationError::UnknownWord(target_word.text().to_string()));
    }

    session.reset();
    let mut guesses = Vec::new();

    for turn in 1..=max_guesses {
        let candidates_before = session.remaining();

        // A lone survivor scores zero like everything else, so play it directly
        let (guess, score) = match (turn, forced_first) {
            (1, Some(forced)) => (forced.clone(), f64::NAN),
            _ if candidates_before == 1 => match session.viable().next() {
                Some(last) => (last.clone(), 0.0),
                None => break,
            },
            _ => match session.suggest(1, 0).top() {
                Some(top) => (top.word.clone(), top.score),
                None => break,
            },
        };

        let feedback = Feedback::evaluate(&target_word, &guess);
        let candidates_after = session.apply(&guess, feedback)?;
        debug!("turn {turn}: {guess} -> {feedback} ({candidates_after} left)");

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            score,
            candidates_before,
            candidates_after,
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target_word.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target_word.text().to_string(),
    })
}
