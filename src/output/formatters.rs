//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| tile(letter, *mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a score relative to the best score of the round
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}

/// Bar for a partition entropy in bits
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 8.0; // Roughly log2 of the number of feedback patterns in play
    create_progress_bar(entropy, max_entropy, width)
}
