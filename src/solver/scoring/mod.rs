//! Guess scoring
//!
//! A [`ScoreCalculator`] is refreshed with the viable set once per round and
//! then scores any number of guesses independently. The bulk pass maps the
//! scoring universe in parallel; calculators hold no mutable state while
//! scoring.

mod entropy;
mod partition;

pub use entropy::{EPSILON, EntropyScorer, LetterFrequencyTable, PositionTerm, ScoreBreakdown, binary_entropy};
pub use partition::PartitionScorer;

use crate::core::{Hyperparameters, WORD_LEN, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A guess paired with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Scores candidate guesses against the current viable set
pub trait ScoreCalculator: Send + Sync {
    /// Rebuild internal tables for a new viable set
    ///
    /// `attempt_num` is the 1-based number of the guess about to be made.
    fn update_universe(&mut self, viable: &[&Word], attempt_num: usize);

    /// Score a single guess; higher is better
    fn score(&self, word: &Word) -> f64;

    /// Score every word of the universe
    fn score_all<'w>(&self, universe: &[&'w Word]) -> Vec<ScoredWord<'w>> {
        universe
            .par_iter()
            .map(|&word| ScoredWord {
                word,
                score: self.score(word),
            })
            .collect()
    }
}

/// Membership of the viable set, keyed by letter codes
pub(crate) type ViableIndex = FxHashSet<[u8; WORD_LEN]>;

pub(crate) fn viable_index(viable: &[&Word]) -> ViableIndex {
    viable.iter().map(|w| *w.codes()).collect()
}

/// Late-game weighting shared by the calculators
///
/// Words that can still be the answer get
/// `answer_weight_base * (1 + attempt_num / max_guesses)`. When few answers
/// remain, or this is the last allowed guess, every other word is worth nothing.
#[must_use]
pub fn plausibility_multiplier(
    hparams: &Hyperparameters,
    is_candidate: bool,
    viable_len: usize,
    attempt_num: usize,
) -> f64 {
    if is_candidate {
        hparams.answer_weight_base() * (1.0 + attempt_num as f64 / hparams.max_guesses() as f64)
    } else if viable_len <= hparams.endgame_threshold() || attempt_num >= hparams.max_guesses() {
        0.0
    } else {
        1.0
    }
}
