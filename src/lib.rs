//! Wordle Buddy
//!
//! A Wordle assistant: it keeps the set of words consistent with the feedback
//! so far and ranks the next guess by expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_buddy::core::{Dictionary, Hyperparameters, Word};
//! use wordle_buddy::solver::{EntropyScorer, ScoringMode, Session};
//!
//! let words = ["crane", "slate", "irate", "crate"].map(|w| Word::new(w).unwrap());
//! let dictionary = Arc::new(Dictionary::new("english", words));
//! let scorer = EntropyScorer::new(Hyperparameters::default());
//! let mut session = Session::new(dictionary, scorer, ScoringMode::Hardcore);
//!
//! // Played "slate", the game answered gray gray green green green
//! let remaining = session.process_guess("slate", "wwggg").unwrap();
//! assert_eq!(remaining, 2);
//!
//! let selection = session.suggest(1, 0);
//! println!("Next guess: {}", selection.top().unwrap().word);
//! ```

// Run settings
pub mod config;

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
