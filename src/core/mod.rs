//! Core domain types
//!
//! Words, feedback, the dictionary and the scoring hyperparameters. Everything
//! here is pure data with validation at construction.

mod dictionary;
mod feedback;
mod hyperparameters;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Feedback, FeedbackError, Mark};
pub use hyperparameters::{
    CONVENTIONAL_MAX_GUESSES, ConfigError, Hyperparameters, HyperparametersBuilder,
};
pub use word::{ALPHABET_SIZE, WORD_LEN, Word, WordError, code_to_char, is_vowel};
