//! Run settings
//!
//! Everything the commands need to build a dictionary and a session. The CLI
//! fills one of these in; nothing is read from global state.

use crate::core::{ConfigError, Dictionary, Hyperparameters};
use crate::solver::{ScoringMode, Session, StrategyKind, StrategyType};
use crate::wordlists::{DictionaryError, load};
use std::path::PathBuf;
use std::sync::Arc;

/// Default number of suggestions shown per round
pub const DEFAULT_NUM_BEST: usize = 10;
/// Default number of worst guesses shown per round
pub const DEFAULT_NUM_WORST: usize = 5;

/// Configuration for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: String,
    pub dict_dir: Option<PathBuf>,
    pub strategy: StrategyKind,
    pub mode: ScoringMode,
    pub max_guesses: usize,
    pub answer_weight: f64,
    pub endgame_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let hparams = Hyperparameters::default();
        Self {
            language: "english".to_string(),
            dict_dir: None,
            strategy: StrategyKind::default(),
            mode: ScoringMode::default(),
            max_guesses: hparams.max_guesses(),
            answer_weight: hparams.answer_weight_base(),
            endgame_threshold: hparams.endgame_threshold(),
        }
    }
}

impl Settings {
    /// Validated hyperparameters for these settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a non-positive answer weight or a zero
    /// guess limit.
    pub fn hyperparameters(&self) -> Result<Hyperparameters, ConfigError> {
        Hyperparameters::builder()
            .max_guesses(self.max_guesses)
            .answer_weight_base(self.answer_weight)
            .endgame_threshold(self.endgame_threshold)
            .build()
    }

    /// Load the configured word bank
    ///
    /// # Errors
    ///
    /// Returns a `DictionaryError` if the language cannot be found or read.
    pub fn load_dictionary(&self) -> Result<Arc<Dictionary>, DictionaryError> {
        load(&self.language, self.dict_dir.as_deref()).map(Arc::new)
    }

    /// Fresh session over `dictionary` with the configured strategy and mode
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the hyperparameters are invalid.
    pub fn session(&self, dictionary: Arc<Dictionary>) -> Result<Session<StrategyType>, ConfigError> {
        let scorer = StrategyType::new(self.strategy, self.hyperparameters()?);
        Ok(Session::new(dictionary, scorer, self.mode))
    }
}
