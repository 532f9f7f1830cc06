//! Benchmark command
//!
//! Self-plays many secrets in parallel, one independent session per secret,
//! and summarizes how many guesses each game took.

use super::solve::solve_word;
use crate::config::Settings;
use crate::core::{ConfigError, Dictionary, Word};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed_words: Vec<String>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw up to `count` distinct secrets from the word bank
///
/// A fixed `seed` makes the draw reproducible.
#[must_use]
pub fn sample_secrets(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => choose(dictionary, count, &mut StdRng::seed_from_u64(seed)),
        None => choose(dictionary, count, &mut rand::rng()),
    }
}

fn choose<R: Rng + ?Sized>(dictionary: &Dictionary, count: usize, rng: &mut R) -> Vec<Word> {
    dictionary
        .words()
        .choose_multiple(rng, count)
        .cloned()
        .collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Solve every secret with a fresh session built from `settings`
///
/// Games that run out of guesses count as failures and are left out of the
/// guess statistics. `forced_first` overrides the opening guess.
///
/// # Errors
///
/// Returns a `ConfigError` if `settings` holds invalid hyperparameters.
pub fn run_benchmark(
    settings: &Settings,
    dictionary: &Arc<Dictionary>,
    secrets: &[Word],
    forced_first: Option<&Word>,
    show_progress: bool,
) -> Result<BenchmarkResult, ConfigError> {
    // Fail fast before spawning any work
    settings.hyperparameters()?;

    let start = Instant::now();
    let pb = progress_bar(secrets.len(), show_progress);

    let outcomes: Vec<(String, Option<usize>)> = secrets
        .par_iter()
        .map(|secret| {
            let outcome = play_one(settings, dictionary, secret, forced_first);
            pb.inc(1);
            (secret.text().to_string(), outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution = FxHashMap::default();
    let mut failed_words = Vec::new();
    for (word, outcome) in &outcomes {
        match outcome {
            Some(guesses) => *distribution.entry(*guesses).or_insert(0) += 1,
            None => failed_words.push(word.clone()),
        }
    }
    failed_words.sort();

    let solved_counts: Vec<usize> = outcomes.iter().filter_map(|(_, o)| *o).collect();
    let solved = solved_counts.len();
    let average_guesses = if solved > 0 {
        solved_counts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    info!(
        "benchmark: {solved}/{} solved in {:.2}s",
        secrets.len(),
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_words: secrets.len(),
        solved,
        failed_words,
        average_guesses,
        min_guesses: solved_counts.iter().copied().min().unwrap_or(0),
        max_guesses: solved_counts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: secrets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Number of guesses needed, or `None` if the game was lost
fn play_one(
    settings: &Settings,
    dictionary: &Arc<Dictionary>,
    secret: &Word,
    forced_first: Option<&Word>,
) -> Option<usize> {
    let mut session = settings.session(Arc::clone(dictionary)).ok()?;
    match solve_word(&mut session, secret.text(), settings.max_guesses, forced_first) {
        Ok(result) if result.success => Some(result.guesses.len()),
        Ok(_) => None,
        Err(e) => {
            warn!("skipping '{secret}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(Dictionary::new(
            "test",
            words_from_slice(&[
                "crane", "slate", "irate", "crate", "grate", "trace", "brash", "pluck", "fuzzy",
                "mound", "glass", "sassy", "robot", "floor",
            ]),
        ))
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = dictionary();
        let secrets = dictionary.words().to_vec();
        let settings = Settings {
            max_guesses: 20,
            ..Settings::default()
        };

        let result = run_benchmark(&settings, &dictionary, &secrets, None, false).unwrap();

        assert_eq!(result.total_words, secrets.len());
        assert_eq!(result.solved, secrets.len());
        assert!(result.failed_words.is_empty());
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = dictionary();
        let secrets = sample_secrets(&dictionary, 6, Some(7));
        let result =
            run_benchmark(&Settings::default(), &dictionary, &secrets, None, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum + result.failed_words.len(), result.total_words);
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let dictionary = dictionary();
        let secrets = sample_secrets(&dictionary, 5, Some(1));
        let forced = Word::new("mound").unwrap();
        let settings = Settings {
            max_guesses: 20,
            ..Settings::default()
        };

        let result = run_benchmark(&settings, &dictionary, &secrets, Some(&forced), false).unwrap();
        assert_eq!(result.solved, 5);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&Settings::default(), &dictionary(), &[], None, false).unwrap();
        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_settings_rejected() {
        let settings = Settings {
            max_guesses: 0,
            ..Settings::default()
        };
        assert!(run_benchmark(&settings, &dictionary(), &[], None, false).is_err());
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let dictionary = dictionary();
        let a = sample_secrets(&dictionary, 4, Some(42));
        let b = sample_secrets(&dictionary, 4, Some(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);

        let all = sample_secrets(&dictionary, 100, None);
        assert_eq!(all.len(), dictionary.len());
    }
}
