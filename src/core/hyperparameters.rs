//! Scoring hyperparameters
//!
//! Immutable once built. Every value is validated by [`HyperparametersBuilder::build`];
//! nothing is clamped or coerced.

use super::word::WORD_LEN;
use log::warn;
use thiserror::Error;

/// Conventional number of guesses in a game
pub const CONVENTIONAL_MAX_GUESSES: usize = 6;

/// Error type for invalid hyperparameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name}[{position}] must be a positive finite weight, got {value}")]
    InvalidWeight {
        name: &'static str,
        position: usize,
        value: f64,
    },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("max_guesses must be at least 1")]
    ZeroMaxGuesses,
}

/// Weights and penalties steering the entropy scorer
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperparameters {
    vowel_pos_weights: [f64; WORD_LEN],
    consonant_pos_weights: [f64; WORD_LEN],
    repeat_letter_penalty: f64,
    mismatch_penalty: f64,
    answer_weight_base: f64,
    max_guesses: usize,
    endgame_threshold: usize,
}

impl Hyperparameters {
    /// Start from the defaults and override selected values
    #[must_use]
    pub fn builder() -> HyperparametersBuilder {
        HyperparametersBuilder::default()
    }

    /// Positional weight for vowels
    #[must_use]
    pub const fn vowel_pos_weights(&self) -> &[f64; WORD_LEN] {
        &self.vowel_pos_weights
    }

    /// Positional weight for consonants
    #[must_use]
    pub const fn consonant_pos_weights(&self) -> &[f64; WORD_LEN] {
        &self.consonant_pos_weights
    }

    #[must_use]
    pub const fn repeat_letter_penalty(&self) -> f64 {
        self.repeat_letter_penalty
    }

    #[must_use]
    pub const fn mismatch_penalty(&self) -> f64 {
        self.mismatch_penalty
    }

    /// Base multiplier for words that can still be the answer
    #[must_use]
    pub const fn answer_weight_base(&self) -> f64 {
        self.answer_weight_base
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Viable-set size at or below which only possible answers are worth guessing
    #[must_use]
    pub const fn endgame_threshold(&self) -> usize {
        self.endgame_threshold
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        let builder = HyperparametersBuilder::default();
        Self {
            vowel_pos_weights: builder.vowel_pos_weights,
            consonant_pos_weights: builder.consonant_pos_weights,
            repeat_letter_penalty: builder.repeat_letter_penalty,
            mismatch_penalty: builder.mismatch_penalty,
            answer_weight_base: builder.answer_weight_base,
            max_guesses: builder.max_guesses,
            endgame_threshold: builder.endgame_threshold,
        }
    }
}

/// Builder for [`Hyperparameters`]
///
/// # Examples
/// ```
/// use wordle_buddy::core::Hyperparameters;
///
/// let hparams = Hyperparameters::builder().max_guesses(8).build().unwrap();
/// assert_eq!(hparams.max_guesses(), 8);
///
/// assert!(Hyperparameters::builder().answer_weight_base(0.0).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HyperparametersBuilder {
    vowel_pos_weights: [f64; WORD_LEN],
    consonant_pos_weights: [f64; WORD_LEN],
    repeat_letter_penalty: f64,
    mismatch_penalty: f64,
    answer_weight_base: f64,
    max_guesses: usize,
    endgame_threshold: usize,
}

impl Default for HyperparametersBuilder {
    fn default() -> Self {
        Self {
            vowel_pos_weights: [1.2; WORD_LEN],
            consonant_pos_weights: [1.5, 1.0, 1.2, 1.1, 1.5],
            repeat_letter_penalty: 1.3,
            mismatch_penalty: 2.0,
            answer_weight_base: 1.0,
            max_guesses: CONVENTIONAL_MAX_GUESSES,
            endgame_threshold: 2,
        }
    }
}

impl HyperparametersBuilder {
    #[must_use]
    pub const fn vowel_pos_weights(mut self, weights: [f64; WORD_LEN]) -> Self {
        self.vowel_pos_weights = weights;
        self
    }

    #[must_use]
    pub const fn consonant_pos_weights(mut self, weights: [f64; WORD_LEN]) -> Self {
        self.consonant_pos_weights = weights;
        self
    }

    #[must_use]
    pub const fn repeat_letter_penalty(mut self, penalty: f64) -> Self {
        self.repeat_letter_penalty = penalty;
        self
    }

    #[must_use]
    pub const fn mismatch_penalty(mut self, penalty: f64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }

    #[must_use]
    pub const fn answer_weight_base(mut self, base: f64) -> Self {
        self.answer_weight_base = base;
        self
    }

    #[must_use]
    pub const fn max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn endgame_threshold(mut self, threshold: usize) -> Self {
        self.endgame_threshold = threshold;
        self
    }

    /// Validate and freeze the configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if any weight or penalty is not a positive finite
    /// number, or if `max_guesses` is zero.
    pub fn build(self) -> Result<Hyperparameters, ConfigError> {
        check_weights("vowel_pos_weights", &self.vowel_pos_weights)?;
        check_weights("consonant_pos_weights", &self.consonant_pos_weights)?;
        check_positive("repeat_letter_penalty", self.repeat_letter_penalty)?;
        check_positive("mismatch_penalty", self.mismatch_penalty)?;
        check_positive("answer_weight_base", self.answer_weight_base)?;

        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        if self.max_guesses != CONVENTIONAL_MAX_GUESSES {
            warn!(
                "max_guesses is set to {}, which differs from the conventional value of {CONVENTIONAL_MAX_GUESSES}",
                self.max_guesses
            );
        }

        Ok(Hyperparameters {
            vowel_pos_weights: self.vowel_pos_weights,
            consonant_pos_weights: self.consonant_pos_weights,
            repeat_letter_penalty: self.repeat_letter_penalty,
            mismatch_penalty: self.mismatch_penalty,
            answer_weight_base: self.answer_weight_base,
            max_guesses: self.max_guesses,
            endgame_threshold: self.endgame_threshold,
        })
    }
}

fn check_weights(name: &'static str, weights: &[f64; WORD_LEN]) -> Result<(), ConfigError> {
    match weights
        .iter()
        .enumerate()
        .find(|&(_, &w)| !(w.is_finite() && w > 0.0))
    {
        Some((position, &value)) => Err(ConfigError::InvalidWeight {
            name,
            position,
            value,
        }),
        None => Ok(()),
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let built = Hyperparameters::builder().build().unwrap();
        assert_eq!(built, Hyperparameters::default());
        assert_eq!(built.max_guesses(), 6);
        assert_eq!(built.endgame_threshold(), 2);
        assert_eq!(built.consonant_pos_weights(), &[1.5, 1.0, 1.2, 1.1, 1.5]);
    }

    #[test]
    fn rejects_non_positive_weight() {
        let err = Hyperparameters::builder()
            .vowel_pos_weights([1.0, 1.0, 0.0, 1.0, 1.0])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWeight {
                name: "vowel_pos_weights",
                position: 2,
                ..
            }
        ));

        assert!(
            Hyperparameters::builder()
                .consonant_pos_weights([1.0, -1.0, 1.0, 1.0, 1.0])
                .build()
                .is_err()
        );
    }

    #[test]
    fn rejects_non_finite_weight() {
        assert!(
            Hyperparameters::builder()
                .vowel_pos_weights([1.0, f64::NAN, 1.0, 1.0, 1.0])
                .build()
                .is_err()
        );
    }

    #[test]
    fn rejects_non_positive_penalties() {
        assert!(matches!(
            Hyperparameters::builder().repeat_letter_penalty(0.0).build(),
            Err(ConfigError::NotPositive {
                name: "repeat_letter_penalty",
                ..
            })
        ));
        assert!(Hyperparameters::builder().mismatch_penalty(-2.0).build().is_err());
        assert!(
            Hyperparameters::builder()
                .answer_weight_base(f64::INFINITY)
                .build()
                .is_err()
        );
    }

    #[test]
    fn rejects_zero_max_guesses() {
        assert_eq!(
            Hyperparameters::builder().max_guesses(0).build(),
            Err(ConfigError::ZeroMaxGuesses)
        );
    }

    #[test]
    fn unconventional_max_guesses_is_accepted() {
        let hparams = Hyperparameters::builder().max_guesses(10).build().unwrap();
        assert_eq!(hparams.max_guesses(), 10);
    }
}
