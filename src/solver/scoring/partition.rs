//! Feedback-partition entropy scoring
//!
//! Scores a guess by the Shannon entropy of how it splits the viable set into
//! feedback classes. Slower than the letter-channel scorer (one oracle call per
//! viable word) but exact for a single step.

use super::{ScoreCalculator, ViableIndex, plausibility_multiplier, viable_index};
use crate::core::{Feedback, Hyperparameters, Word};
use rustc_hash::FxHashMap;

/// Shannon entropy of a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one class holding everything)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n classes
#[must_use]
pub fn shannon_entropy<S>(class_sizes: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = class_sizes.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    class_sizes
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Group the viable words by the feedback `guess` would receive
fn group_by_feedback(guess: &Word, viable: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for secret in viable {
        *counts.entry(Feedback::evaluate(secret, guess)).or_insert(0) += 1;
    }

    counts
}

/// Exact one-step partition entropy with the shared endgame weighting
#[derive(Debug, Clone)]
pub struct PartitionScorer {
    hparams: Hyperparameters,
    viable: Vec<Word>,
    index: ViableIndex,
    attempt_num: usize,
}

impl PartitionScorer {
    #[must_use]
    pub fn new(hparams: Hyperparameters) -> Self {
        Self {
            hparams,
            viable: Vec::new(),
            index: ViableIndex::default(),
            attempt_num: 1,
        }
    }

    /// Partition entropy in bits, before any weighting
    #[must_use]
    pub fn partition_entropy(&self, guess: &Word) -> f64 {
        if self.viable.is_empty() {
            return 0.0;
        }
        shannon_entropy(&group_by_feedback(guess, &self.viable))
    }
}

impl ScoreCalculator for PartitionScorer {
    fn update_universe(&mut self, viable: &[&Word], attempt_num: usize) {
        self.viable = viable.iter().map(|&w| w.clone()).collect();
        self.index = viable_index(viable);
        self.attempt_num = attempt_num;
    }

    fn score(&self, word: &Word) -> f64 {
        let multiplier = plausibility_multiplier(
            &self.hparams,
            self.index.contains(word.codes()),
            self.viable.len(),
            self.attempt_num,
        );
        if multiplier <= 0.0 {
            return 0.0;
        }
        self.partition_entropy(word) * multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn scorer_for(viable: &[Word]) -> PartitionScorer {
        let refs: Vec<&Word> = viable.iter().collect();
        let mut scorer = PartitionScorer::new(Hyperparameters::default());
        scorer.update_universe(&refs, 1);
        scorer
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        for text in ["ggggg", "wwwww", "yyyyy", "gwgwg"] {
            counts.insert(text.parse::<Feedback>().unwrap(), 1);
        }
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Feedback::SOLVED, 10);
        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let scorer = scorer_for(&words(&["slate", "zzzzz"]));
        let entropy = scorer.partition_entropy(&Word::new("slate").unwrap());
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn all_same_feedback_is_zero() {
        let scorer = scorer_for(&words(&["aaaaa", "bbbbb", "ccccc"]));
        assert!(scorer.partition_entropy(&Word::new("zzzzz").unwrap()).abs() < 0.001);
    }

    #[test]
    fn diverse_guess_beats_repetitive_one() {
        let viable = words(&["slate", "irate", "crate", "grate"]);
        let scorer = scorer_for(&viable);
        let diverse = scorer.score(&Word::new("crisp").unwrap());
        let repetitive = scorer.score(&Word::new("aaaaa").unwrap());
        assert!(diverse > repetitive);
    }

    #[test]
    fn entropy_bounded_by_class_count() {
        let viable = words(&["crane", "slate", "irate", "trace", "raise"]);
        let scorer = scorer_for(&viable);
        let entropy = scorer.partition_entropy(&Word::new("crane").unwrap());
        assert!(entropy > 1.0 && entropy <= (viable.len() as f64).log2() + 1e-12);
    }

    #[test]
    fn empty_viable_set_scores_zero() {
        let scorer = scorer_for(&[]);
        assert!(scorer.score(&Word::new("crane").unwrap()).abs() < f64::EPSILON);
    }
}
