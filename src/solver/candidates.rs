//! Constraint filtering of the viable answer set
//!
//! Feedback for a letter that occurs several times in a guess has to be read
//! jointly: the game hands out each copy of a secret letter to at most one
//! guessed occurrence. So the marks for one letter are folded into a count
//! window plus positional pins before any word is tested.

use crate::core::{Dictionary, Feedback, FeedbackError, Mark, WORD_LEN, Word, WordError};
use log::debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for a rejected guess/feedback pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not in the word bank")]
    UnknownWord(String),
    #[error("invalid guess: {0}")]
    MalformedWord(#[from] WordError),
    #[error("invalid feedback: {0}")]
    MalformedFeedback(#[from] FeedbackError),
}

/// Everything one guess says about a single letter
#[derive(Debug, Clone, PartialEq, Eq)]
struct LetterConstraint {
    code: u8,
    min_count: usize,
    max_count: usize,
    correct: Vec<usize>,
    present: Vec<usize>,
    absent: Vec<usize>,
}

impl LetterConstraint {
    /// Fold the marks of every occurrence of `code` in the guess
    fn collect(code: u8, guess: &Word, feedback: &Feedback) -> Self {
        let mut constraint = Self {
            code,
            min_count: 0,
            max_count: WORD_LEN,
            correct: Vec::new(),
            present: Vec::new(),
            absent: Vec::new(),
        };

        for (position, (&letter, &mark)) in guess.codes().iter().zip(feedback.marks()).enumerate()
        {
            if letter != code {
                continue;
            }
            match mark {
                Mark::Correct => constraint.correct.push(position),
                Mark::Present => constraint.present.push(position),
                Mark::Absent => constraint.absent.push(position),
            }
        }

        constraint.min_count = constraint.correct.len() + constraint.present.len();
        if !constraint.absent.is_empty() {
            // An absent copy caps the count at what was confirmed
            constraint.max_count = constraint.min_count;
        }

        constraint
    }

    fn admits(&self, word: &Word) -> bool {
        let codes = word.codes();
        let count = word.count_of(self.code);

        if count < self.min_count || count > self.max_count {
            return false;
        }

        if self.correct.iter().any(|&p| codes[p] != self.code) {
            return false;
        }

        // Neither a yellow nor a gray position can hold the letter
        if self
            .present
            .iter()
            .chain(&self.absent)
            .any(|&p| codes[p] == self.code)
        {
            return false;
        }

        self.present.iter().all(|&p| {
            codes
                .iter()
                .enumerate()
                .any(|(q, &c)| c == self.code && q != p && !self.correct.contains(&q))
        })
    }
}

/// Builds the per-letter constraints for one guess
fn constraints_for(guess: &Word, feedback: &Feedback) -> Vec<LetterConstraint> {
    let mut seen = [false; crate::core::ALPHABET_SIZE];
    guess
        .codes()
        .iter()
        .filter(|&&code| !std::mem::replace(&mut seen[usize::from(code)], true))
        .map(|&code| LetterConstraint::collect(code, guess, feedback))
        .collect()
}

/// Whether `word` is consistent with a single guess and its feedback
///
/// # Examples
/// ```
/// use wordle_buddy::core::{Feedback, Word};
/// use wordle_buddy::solver::is_consistent;
///
/// let guess = Word::new("sassy").unwrap();
/// let feedback: Feedback = "yywgw".parse().unwrap();
/// assert!(is_consistent(&Word::new("glass").unwrap(), &guess, &feedback));
/// assert!(!is_consistent(&Word::new("sissy").unwrap(), &guess, &feedback));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    constraints_for(guess, feedback)
        .iter()
        .all(|constraint| constraint.admits(word))
}

/// The words still consistent with every feedback seen this game
///
/// Holds indices into a shared [`Dictionary`]. The set only ever shrinks until
/// [`CandidateSet::reset`] restores the whole dictionary.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    dictionary: Arc<Dictionary>,
    viable: Vec<usize>,
}

impl CandidateSet {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        let viable = (0..dictionary.len()).collect();
        Self { dictionary, viable }
    }

    /// Narrow the viable set with a guess and the feedback it received
    ///
    /// Returns the number of words that remain. An empty result is not an
    /// error; callers check [`CandidateSet::is_empty`].
    ///
    /// # Errors
    /// Returns `ValidationError::UnknownWord` if the guess is not in the
    /// dictionary. The viable set is left untouched on error.
    pub fn cull(&mut self, guess: &Word, feedback: &Feedback) -> Result<usize, ValidationError> {
        if !self.dictionary.contains(guess.text()) {
            return Err(ValidationError::UnknownWord(guess.text().to_string()));
        }

        let constraints = constraints_for(guess, feedback);
        let before = self.viable.len();
        let dictionary = &self.dictionary;

        self.viable.retain(|&i| {
            let word = dictionary.word(i);
            constraints.iter().all(|constraint| constraint.admits(word))
        });

        debug!(
            "cull {guess} {feedback}: {before} -> {} candidates",
            self.viable.len()
        );
        Ok(self.viable.len())
    }

    /// Parse and validate raw input, then cull
    ///
    /// # Errors
    /// Returns a `ValidationError` naming the first violated constraint:
    /// a malformed word, malformed feedback, or a word outside the dictionary.
    pub fn cull_raw(&mut self, guess: &str, feedback: &str) -> Result<usize, ValidationError> {
        let (guess, feedback) = self.validate(guess, feedback)?;
        self.cull(&guess, &feedback)
    }

    /// Check a raw guess/feedback pair without touching the viable set
    ///
    /// # Errors
    /// See [`CandidateSet::cull_raw`].
    pub fn validate(&self, guess: &str, feedback: &str) -> Result<(Word, Feedback), ValidationError> {
        let guess = Word::new(guess)?;
        let feedback: Feedback = feedback.parse()?;
        if !self.dictionary.contains(guess.text()) {
            return Err(ValidationError::UnknownWord(guess.text().to_string()));
        }
        Ok((guess, feedback))
    }

    /// Restore the full dictionary
    pub fn reset(&mut self) {
        self.viable.clear();
        self.viable.extend(0..self.dictionary.len());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.viable.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viable.is_empty()
    }

    /// Viable words in dictionary order
    pub fn words(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.viable.iter().map(|&i| self.dictionary.word(i))
    }

    /// Check if a word is still viable
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary
            .index_of(word.text())
            .is_some_and(|i| self.viable.binary_search(&i).is_ok())
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_set(words: &[&str]) -> CandidateSet {
        let dictionary = Dictionary::new("test", words.iter().map(|w| Word::new(w).unwrap()));
        CandidateSet::new(Arc::new(dictionary))
    }

    fn remaining(set: &CandidateSet) -> Vec<&str> {
        set.words().map(Word::text).collect()
    }

    #[test]
    fn green_pins_position() {
        let mut set = candidate_set(&["crane", "crate", "slate", "trace"]);
        set.cull_raw("crane", "gggwg").unwrap();
        assert_eq!(remaining(&set), ["crate"]);
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let mut set = candidate_set(&["arose", "trace", "crane", "lemon"]);
        // 'a' present but not first, everything else absent
        set.cull_raw("arose", "ywwww").unwrap();
        assert!(set.is_empty());

        let mut set = candidate_set(&["arose", "chalk", "plaid", "lemon"]);
        set.cull_raw("arose", "ywwww").unwrap();
        assert_eq!(remaining(&set), ["chalk", "plaid"]);
    }

    #[test]
    fn single_absent_excludes_letter() {
        let mut set = candidate_set(&["crane", "slate", "doubt", "bumpy"]);
        set.cull_raw("crane", "wwwww").unwrap();
        assert_eq!(remaining(&set), ["doubt", "bumpy"]);
    }

    #[test]
    fn repeated_letter_caps_count() {
        // Secret "glass" answers "sassy" with yywgw: exactly two s
        let mut set = candidate_set(&["glass", "class", "sissy", "bless", "swiss", "gloss"]);
        set.cull_raw("sassy", "yywgw").unwrap();
        // sissy and swiss carry three s, bless/gloss have no 'a'
        assert_eq!(remaining(&set), ["glass", "class"]);
    }

    #[test]
    fn repeated_letter_absent_after_green() {
        let secret = Word::new("abide").unwrap();
        let guess = Word::new("geese").unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(feedback.to_string(), "wwwwg");

        let mut set = candidate_set(&["abide", "geese", "olive", "eerie", "eaten"]);
        set.cull(&guess, &feedback).unwrap();
        // Exactly one e, and it is last
        assert_eq!(remaining(&set), ["abide", "olive"]);
    }

    #[test]
    fn double_yellow_requires_two_copies() {
        let secret = Word::new("level").unwrap();
        let guess = Word::new("eerie").unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(feedback.to_string(), "ygwww");

        let mut set = candidate_set(&["level", "lemon", "hello", "bevel"]);
        set.cull(&guess, &feedback).unwrap();
        // two e's with one pinned at index 1 and another not at index 0
        assert_eq!(remaining(&set), ["level", "bevel"]);
    }

    #[test]
    fn unknown_word_rejected_without_change() {
        let mut set = candidate_set(&["crane", "slate"]);
        let err = set.cull_raw("irate", "ggggg").unwrap_err();
        assert_eq!(err, ValidationError::UnknownWord("irate".to_string()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn malformed_input_rejected_without_change() {
        let mut set = candidate_set(&["crane", "slate"]);

        assert!(matches!(
            set.cull_raw("cranes", "ggggg"),
            Err(ValidationError::MalformedWord(WordError::InvalidLength(6)))
        ));
        assert!(matches!(
            set.cull_raw("crane", "gggg"),
            Err(ValidationError::MalformedFeedback(FeedbackError::WrongLength(4)))
        ));
        assert!(matches!(
            set.cull_raw("crane", "ggxgg"),
            Err(ValidationError::MalformedFeedback(FeedbackError::InvalidSymbol('x')))
        ));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut set = candidate_set(&["crane", "slate"]);
        assert_eq!(set.cull_raw("crane", "yyyyy").unwrap(), 0);
        assert!(set.is_empty());
        assert_eq!(set.words().len(), 0);
    }

    #[test]
    fn reset_restores_dictionary() {
        let mut set = candidate_set(&["crane", "slate", "irate"]);
        set.cull_raw("crane", "ggggg").unwrap();
        assert_eq!(set.len(), 1);

        set.reset();
        assert_eq!(remaining(&set), ["crane", "slate", "irate"]);
        set.reset();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn contains_tracks_viability() {
        let mut set = candidate_set(&["crane", "slate", "irate"]);
        let slate = Word::new("slate").unwrap();
        assert!(set.contains(&slate));

        set.cull_raw("crane", "ggggg").unwrap();
        assert!(!set.contains(&slate));
        assert!(!set.contains(&Word::new("zzzzz").unwrap()));
    }
}
