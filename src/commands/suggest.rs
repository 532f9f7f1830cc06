//! One-shot suggestions
//!
//! Replays a list of `word=feedback` attempts and ranks the next guess.

use crate::solver::{ScoreCalculator, Selection, Session, ValidationError};

/// Split a `word=feedback` argument
///
/// `:` is accepted as the separator too.
///
/// # Errors
///
/// Returns a message if the separator is missing or either side is empty.
///
/// # Examples
/// ```
/// use wordle_buddy::commands::parse_attempt;
///
/// assert_eq!(
///     parse_attempt("crane=gywww").unwrap(),
///     ("crane".to_string(), "gywww".to_string())
/// );
/// assert!(parse_attempt("crane").is_err());
/// ```
pub fn parse_attempt(arg: &str) -> Result<(String, String), String> {
    let (word, feedback) = arg
        .split_once(['=', ':'])
        .ok_or_else(|| format!("expected WORD=FEEDBACK, got '{arg}'"))?;
    let (word, feedback) = (word.trim(), feedback.trim());
    if word.is_empty() || feedback.is_empty() {
        return Err(format!("expected WORD=FEEDBACK, got '{arg}'"));
    }
    Ok((word.to_string(), feedback.to_string()))
}

/// Replace the session's history with `attempts` and rank the next guess
///
/// # Errors
///
/// Returns the first `ValidationError`; the session is left as it was.
pub fn suggest<'s, S: ScoreCalculator>(
    session: &'s mut Session<S>,
    attempts: &[(String, String)],
    num_best: usize,
    num_worst: usize,
) -> Result<Selection<'s>, ValidationError> {
    session.process_guesses(attempts)?;
    Ok(session.suggest(num_best, num_worst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, Hyperparameters, Word};
    use crate::solver::{EntropyScorer, ScoringMode};
    use std::sync::Arc;

    fn session() -> Session<EntropyScorer> {
        let words = ["crane", "slate", "irate", "crate", "grate", "trace", "fuzzy", "mound"];
        let dictionary = Dictionary::new("test", words.iter().map(|w| Word::new(w).unwrap()));
        Session::new(
            Arc::new(dictionary),
            EntropyScorer::new(Hyperparameters::default()),
            ScoringMode::Hardcore,
        )
    }

    fn attempts(pairs: &[&str]) -> Vec<(String, String)> {
        pairs.iter().map(|p| parse_attempt(p).unwrap()).collect()
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(
            parse_attempt(" slate : wwggg ").unwrap(),
            ("slate".to_string(), "wwggg".to_string())
        );
        assert!(parse_attempt("slate=").is_err());
        assert!(parse_attempt("=wwggg").is_err());
    }

    #[test]
    fn ranks_after_replay() {
        let mut game = session();
        let selection = suggest(&mut game, &attempts(&["slate=wwggg"]), 3, 1).unwrap();

        assert!(selection.best().len() <= 3);
        assert!(
            selection
                .best()
                .iter()
                .all(|s| s.word.text().ends_with("ate"))
        );
    }

    #[test]
    fn no_attempts_ranks_whole_dictionary() {
        let mut game = session();
        let selection = suggest(&mut game, &[], 100, 0).unwrap();
        assert_eq!(selection.best().len(), 8);
    }

    #[test]
    fn contradictory_feedback_yields_sentinel() {
        let mut game = session();
        let selection = suggest(&mut game, &attempts(&["fuzzy=ggggy"]), 5, 5).unwrap();
        assert_eq!(selection, Selection::NoViableGuesses);
    }

    #[test]
    fn invalid_attempt_rejected() {
        let mut game = session();
        assert!(suggest(&mut game, &attempts(&["xxxxx=wwwww"]), 5, 5).is_err());
        assert!(suggest(&mut game, &attempts(&["slate=wwgg"]), 5, 5).is_err());
        assert!(game.history().is_empty());
    }
}
