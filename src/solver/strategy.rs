//! Runtime choice of score calculator
//!
//! Wraps the calculators in an enum so the CLI can pick one by name while the
//! session stays statically dispatched.

use super::scoring::{EntropyScorer, PartitionScorer, ScoreCalculator};
use crate::core::{Hyperparameters, Word};
use clap::ValueEnum;

/// Names of the available scoring strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// Letter-channel entropy with positional weights (default)
    #[default]
    Entropy,
    /// Exact feedback-partition entropy
    Partition,
}

/// Enum wrapper for all score calculators
#[derive(Debug, Clone)]
pub enum StrategyType {
    Entropy(EntropyScorer),
    Partition(PartitionScorer),
}

impl StrategyType {
    /// Build the calculator for a strategy name
    #[must_use]
    pub fn new(kind: StrategyKind, hparams: Hyperparameters) -> Self {
        match kind {
            StrategyKind::Entropy => Self::Entropy(EntropyScorer::new(hparams)),
            StrategyKind::Partition => Self::Partition(PartitionScorer::new(hparams)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Entropy(_) => StrategyKind::Entropy,
            Self::Partition(_) => StrategyKind::Partition,
        }
    }
}

impl ScoreCalculator for StrategyType {
    fn update_universe(&mut self, viable: &[&Word], attempt_num: usize) {
        match self {
            Self::Entropy(s) => s.update_universe(viable, attempt_num),
            Self::Partition(s) => s.update_universe(viable, attempt_num),
        }
    }

    fn score(&self, word: &Word) -> f64 {
        match self {
            Self::Entropy(s) => s.score(word),
            Self::Partition(s) => s.score(word),
        }
    }
}
