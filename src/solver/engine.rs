//! Game session: viable set, attempt history and scorer together

use super::candidates::{CandidateSet, ValidationError};
use super::scoring::ScoreCalculator;
use super::selector::{Selection, select};
use crate::core::{Dictionary, Feedback, Word};
use log::{debug, info};
use std::sync::Arc;

/// Which words may be suggested as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Only words that can still be the answer
    #[default]
    Hardcore,
    /// Any dictionary word, including eliminated ones
    Exploration,
}

impl ScoringMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hardcore => Self::Exploration,
            Self::Exploration => Self::Hardcore,
        }
    }
}

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A game in progress
///
/// The session is the single owner of the attempt history; resetting it resets
/// the viable set as well.
pub struct Session<S: ScoreCalculator> {
    candidates: CandidateSet,
    scorer: S,
    mode: ScoringMode,
    history: Vec<Attempt>,
}

impl<S: ScoreCalculator> Session<S> {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, scorer: S, mode: ScoringMode) -> Self {
        Self {
            candidates: CandidateSet::new(dictionary),
            scorer,
            mode,
            history: Vec::new(),
        }
    }

    /// Record a guess and its feedback, returning the number of viable words left
    ///
    /// # Errors
    /// Returns `ValidationError::UnknownWord` if the guess is not in the
    /// dictionary; nothing is recorded in that case.
    pub fn apply(&mut self, guess: &Word, feedback: Feedback) -> Result<usize, ValidationError> {
        let remaining = self.candidates.cull(guess, &feedback)?;
        self.history.push(Attempt {
            guess: guess.clone(),
            feedback,
        });
        Ok(remaining)
    }

    /// Parse, validate and record a raw guess/feedback pair
    ///
    /// # Errors
    /// Returns a `ValidationError` for a malformed word, malformed feedback or
    /// a word outside the dictionary.
    pub fn process_guess(&mut self, guess: &str, feedback: &str) -> Result<usize, ValidationError> {
        let (guess, feedback) = self.candidates.validate(guess, feedback)?;
        self.apply(&guess, feedback)
    }

    /// Replace the game with a full list of past guesses
    ///
    /// Every pair is validated before the session is reset, so a bad entry
    /// leaves the current game untouched.
    ///
    /// # Errors
    /// Returns the first `ValidationError` found.
    pub fn process_guesses<G, F>(&mut self, attempts: &[(G, F)]) -> Result<usize, ValidationError>
    where
        G: AsRef<str>,
        F: AsRef<str>,
    {
        let parsed = attempts
            .iter()
            .map(|(g, f)| self.candidates.validate(g.as_ref(), f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.reset();
        for (guess, feedback) in parsed {
            self.apply(&guess, feedback)?;
        }
        Ok(self.remaining())
    }

    /// Drop the last attempt and replay the rest
    ///
    /// Returns the removed attempt, or `None` if nothing was played yet.
    pub fn undo(&mut self) -> Option<Attempt> {
        let undone = self.history.pop()?;
        let replay = std::mem::take(&mut self.history);

        self.candidates.reset();
        for attempt in replay {
            // Replayed attempts were accepted once already
            if self.candidates.cull(&attempt.guess, &attempt.feedback).is_ok() {
                self.history.push(attempt);
            }
        }

        debug!("undid {}, {} candidates", undone.guess, self.remaining());
        Some(undone)
    }

    /// Rank the scoring universe for the next guess
    ///
    /// Returns [`Selection::NoViableGuesses`] once no dictionary word is
    /// consistent with the feedback.
    pub fn suggest(&mut self, num_best: usize, num_worst: usize) -> Selection<'_> {
        if self.candidates.is_empty() {
            info!("no viable words remain after {} attempts", self.history.len());
            return Selection::NoViableGuesses;
        }

        let attempt_num = self.attempt_num();
        let viable: Vec<&Word> = self.candidates.words().collect();
        self.scorer.update_universe(&viable, attempt_num);

        let universe: Vec<&Word> = match self.mode {
            ScoringMode::Hardcore => viable,
            ScoringMode::Exploration => self.candidates.dictionary().words().iter().collect(),
        };
        debug!(
            "scoring {} words ({:?}) for attempt {attempt_num}",
            universe.len(),
            self.mode
        );

        let scored = self.scorer.score_all(&universe);
        select(scored, num_best, num_worst)
    }

    /// Start a new game over the same dictionary
    pub fn reset(&mut self) {
        self.candidates.reset();
        self.history.clear();
    }

    #[must_use]
    pub const fn mode(&self) -> ScoringMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ScoringMode) {
        self.mode = mode;
    }

    /// 1-based number of the guess about to be made
    #[must_use]
    pub fn attempt_num(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Number of words that can still be the answer
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Words that can still be the answer, in dictionary order
    pub fn viable(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.candidates.words()
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Check if the last feedback was all correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|a| a.feedback.is_solved())
    }
}
