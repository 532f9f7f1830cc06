//! Filtering and scoring
//!
//! [`CandidateSet`] narrows the viable answers, a [`ScoreCalculator`] rates
//! guesses against them and [`select`] ranks the result. [`Session`] ties the
//! three together for one game.

mod candidates;
mod engine;
pub mod scoring;
mod selector;
pub mod strategy;

pub use candidates::{CandidateSet, ValidationError, is_consistent};
pub use engine::{Attempt, ScoringMode, Session};
pub use scoring::{EntropyScorer, PartitionScorer, ScoreCalculator, ScoredWord};
pub use selector::{Selection, select};
pub use strategy::{StrategyKind, StrategyType};
