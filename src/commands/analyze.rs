//! Word analysis command
//!
//! Explains one guess against a viable set: the per-position entropy terms,
//! the plausibility multiplier and the exact partition entropy.

use crate::core::{Dictionary, Hyperparameters, Word};
use crate::solver::scoring::ScoreBreakdown;
use crate::solver::{EntropyScorer, PartitionScorer, ScoreCalculator, ValidationError};

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub breakdown: ScoreBreakdown,
    pub partition_entropy: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    pub attempt_num: usize,
}

/// Analyze `word` as guess number `attempt_num` against `viable`
///
/// # Errors
///
/// Returns `ValidationError::MalformedWord` for an invalid word and
/// `ValidationError::UnknownWord` if it is not in the word bank.
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    viable: &[&Word],
    attempt_num: usize,
    hparams: &Hyperparameters,
) -> Result<AnalysisResult, ValidationError> {
    let word_obj = Word::new(word)?;
    if !dictionary.contains(word_obj.text()) {
        return Err(ValidationError::UnknownWord(word_obj.text().to_string()));
    }

    let mut entropy = EntropyScorer::new(hparams.clone());
    entropy.update_universe(viable, attempt_num);
    let mut partition = PartitionScorer::new(hparams.clone());
    partition.update_universe(viable, attempt_num);

    let partition_entropy = partition.partition_entropy(&word_obj);
    let total_candidates = viable.len();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        breakdown: entropy.breakdown(&word_obj),
        partition_entropy,
        expected_remaining: total_candidates as f64 / partition_entropy.exp2(),
        total_candidates,
        attempt_num,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ENGLISH;
    use crate::wordlists::loader::words_from_slice;

    fn english() -> Dictionary {
        Dictionary::new("english", words_from_slice(ENGLISH))
    }

    #[test]
    fn analyze_valid_word() {
        let dictionary = english();
        let viable: Vec<&Word> = dictionary.words().iter().collect();

        let result = analyze_word("CRANE", &dictionary, &viable, 1, &Hyperparameters::default())
            .unwrap();

        assert_eq!(result.word, "crane");
        assert!(result.breakdown.is_candidate);
        assert!(result.breakdown.total > 0.0);
        assert!(result.partition_entropy > 0.0);
        assert_eq!(result.total_candidates, dictionary.len());
        let letters: String = result.breakdown.terms.iter().map(|t| t.letter).collect();
        assert_eq!(letters, "crane");
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = english();
        let viable: Vec<&Word> = dictionary.words().iter().collect();
        let hparams = Hyperparameters::default();

        assert!(analyze_word("zzzzz", &dictionary, &viable, 1, &hparams).is_err());
        assert!(analyze_word("cran", &dictionary, &viable, 1, &hparams).is_err());
    }

    #[test]
    fn entropy_properties() {
        let dictionary = english();
        let viable: Vec<&Word> = dictionary.words().iter().take(100).collect();

        let result =
            analyze_word("slate", &dictionary, &viable, 2, &Hyperparameters::default()).unwrap();

        assert!(result.partition_entropy >= 0.0);
        assert!(result.partition_entropy <= (viable.len() as f64).log2() + 1e-9);
        assert!(result.expected_remaining >= 1.0 - 1e-9);
        assert!(result.expected_remaining <= viable.len() as f64);
    }

    #[test]
    fn non_viable_word_zeroed_in_endgame() {
        let dictionary = english();
        let viable: Vec<&Word> = ["crane", "crate"]
            .iter()
            .filter_map(|w| dictionary.get(w))
            .collect();

        let result =
            analyze_word("slate", &dictionary, &viable, 3, &Hyperparameters::default()).unwrap();
        assert!(!result.breakdown.is_candidate);
        assert!(result.breakdown.multiplier.abs() < f64::EPSILON);
        assert!(result.breakdown.total.abs() < f64::EPSILON);
    }
}
