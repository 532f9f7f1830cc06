//! Letter-channel entropy scoring
//!
//! Every (letter, position) of a guess reveals three binary outcomes: the
//! letter is there (green), it is somewhere else (yellow), or it is nowhere
//! (white). Each channel's information content is the binary entropy of its
//! probability under the viable set. A word's score is the weighted sum over
//! its positions.

use super::{ScoreCalculator, ViableIndex, plausibility_multiplier, viable_index};
use crate::core::{ALPHABET_SIZE, Hyperparameters, WORD_LEN, Word, code_to_char, is_vowel};
use log::trace;

/// Probabilities are clipped to `[EPSILON, 1 - EPSILON]` before taking logs
pub const EPSILON: f64 = 1e-10;

/// Binary Shannon entropy in bits
///
/// H(p) = -p·log₂(p) - (1-p)·log₂(1-p)
///
/// Probabilities at or beyond the clipping bounds describe a certain or
/// impossible event and carry no information, so they return exactly `0.0`.
///
/// # Examples
/// ```
/// use wordle_buddy::solver::scoring::binary_entropy;
///
/// assert!((binary_entropy(0.5) - 1.0).abs() < 1e-12);
/// assert_eq!(binary_entropy(0.0), 0.0);
/// assert_eq!(binary_entropy(1.0), 0.0);
/// ```
#[must_use]
pub fn binary_entropy(p: f64) -> f64 {
    let p = p.clamp(EPSILON, 1.0 - EPSILON);
    if p <= EPSILON || p >= 1.0 - EPSILON {
        return 0.0;
    }
    let q = 1.0 - p;
    -p * p.log2() - q * q.log2()
}

/// Counts of each letter at each position across a set of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    counts: [[u32; WORD_LEN]; ALPHABET_SIZE],
    totals: [u32; ALPHABET_SIZE],
    words: usize,
}

impl LetterFrequencyTable {
    #[must_use]
    pub fn build(words: &[&Word]) -> Self {
        let mut counts = [[0u32; WORD_LEN]; ALPHABET_SIZE];
        let mut totals = [0u32; ALPHABET_SIZE];

        for word in words {
            for (position, &code) in word.codes().iter().enumerate() {
                counts[usize::from(code)][position] += 1;
                totals[usize::from(code)] += 1;
            }
        }

        Self {
            counts,
            totals,
            words: words.len(),
        }
    }

    /// Words with `code` at `position`
    #[inline]
    #[must_use]
    pub fn count(&self, code: u8, position: usize) -> u32 {
        self.counts[usize::from(code)][position]
    }

    /// Occurrences of `code` at any position
    #[inline]
    #[must_use]
    pub fn total(&self, code: u8) -> u32 {
        self.totals[usize::from(code)]
    }

    /// Number of words the table was built from
    #[inline]
    #[must_use]
    pub const fn words(&self) -> usize {
        self.words
    }

    fn fraction(&self, count: u32) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            f64::from(count) / self.words as f64
        }
    }

    /// Probability a remaining answer has `code` exactly at `position`
    #[must_use]
    pub fn p_green(&self, code: u8, position: usize) -> f64 {
        self.fraction(self.count(code, position))
    }

    /// Probability `code` occurs at some other position
    #[must_use]
    pub fn p_yellow(&self, code: u8, position: usize) -> f64 {
        self.fraction(self.total(code) - self.count(code, position))
    }

    /// Probability `code` does not occur at all
    #[must_use]
    pub fn p_white(&self, code: u8) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        1.0 - self.fraction(self.total(code))
    }
}

/// Channel entropies for every (letter, position), derived from one table
#[derive(Debug, Clone)]
struct ChannelEntropies {
    green: [[f64; WORD_LEN]; ALPHABET_SIZE],
    yellow: [[f64; WORD_LEN]; ALPHABET_SIZE],
    white: [f64; ALPHABET_SIZE],
}

impl ChannelEntropies {
    fn from_table(table: &LetterFrequencyTable) -> Self {
        let mut green = [[0.0; WORD_LEN]; ALPHABET_SIZE];
        let mut yellow = [[0.0; WORD_LEN]; ALPHABET_SIZE];
        let mut white = [0.0; ALPHABET_SIZE];

        for code in 0..ALPHABET_SIZE as u8 {
            let c = usize::from(code);
            for position in 0..WORD_LEN {
                green[c][position] = binary_entropy(table.p_green(code, position));
                yellow[c][position] = binary_entropy(table.p_yellow(code, position));
            }
            white[c] = binary_entropy(table.p_white(code));
        }

        Self {
            green,
            yellow,
            white,
        }
    }
}

/// Contribution of one position of a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionTerm {
    pub letter: char,
    pub green: f64,
    pub yellow: f64,
    pub white: f64,
    /// Scale on the yellow channel, `(1 + 1/k) / 2` for a letter repeated `k > 1` times
    pub yellow_factor: f64,
    /// Scale on the white channel, `1/k`
    pub white_factor: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Full explanation of a word's score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub terms: [PositionTerm; WORD_LEN],
    pub raw: f64,
    pub is_candidate: bool,
    pub multiplier: f64,
    pub total: f64,
}

/// Letter-channel entropy scorer with positional weights and endgame weighting
#[derive(Debug, Clone)]
pub struct EntropyScorer {
    hparams: Hyperparameters,
    table: LetterFrequencyTable,
    entropies: ChannelEntropies,
    viable: ViableIndex,
    attempt_num: usize,
}

impl EntropyScorer {
    /// Create a scorer; it scores against an empty viable set until
    /// [`ScoreCalculator::update_universe`] is called
    #[must_use]
    pub fn new(hparams: Hyperparameters) -> Self {
        let table = LetterFrequencyTable::build(&[]);
        let entropies = ChannelEntropies::from_table(&table);
        Self {
            hparams,
            table,
            entropies,
            viable: ViableIndex::default(),
            attempt_num: 1,
        }
    }

    #[must_use]
    pub const fn hyperparameters(&self) -> &Hyperparameters {
        &self.hparams
    }

    /// Frequency table of the current viable set
    #[must_use]
    pub const fn table(&self) -> &LetterFrequencyTable {
        &self.table
    }

    fn terms(&self, word: &Word) -> [PositionTerm; WORD_LEN] {
        let counts = word.letter_counts();
        let vowel_weights = self.hparams.vowel_pos_weights();
        let consonant_weights = self.hparams.consonant_pos_weights();

        std::array::from_fn(|position| {
            let code = word.code_at(position);
            let c = usize::from(code);
            let k = f64::from(counts[c]);

            let yellow_factor = if counts[c] > 1 { (1.0 + 1.0 / k) / 2.0 } else { 1.0 };
            let white_factor = 1.0 / k;
            let weight = if is_vowel(code) {
                vowel_weights[position]
            } else {
                consonant_weights[position]
            };

            let green = self.entropies.green[c][position];
            let yellow = self.entropies.yellow[c][position];
            let white = self.entropies.white[c];

            PositionTerm {
                letter: code_to_char(code),
                green,
                yellow,
                white,
                yellow_factor,
                white_factor,
                weight,
                contribution: weight * (green + yellow * yellow_factor + white * white_factor),
            }
        })
    }

    /// Explain how a word's score is put together
    #[must_use]
    pub fn breakdown(&self, word: &Word) -> ScoreBreakdown {
        let terms = self.terms(word);
        let raw = terms.iter().map(|t| t.contribution).sum::<f64>();
        let is_candidate = self.viable.contains(word.codes());
        let multiplier = plausibility_multiplier(
            &self.hparams,
            is_candidate,
            self.table.words(),
            self.attempt_num,
        );

        ScoreBreakdown {
            terms,
            raw,
            is_candidate,
            multiplier,
            total: raw * multiplier,
        }
    }
}

impl ScoreCalculator for EntropyScorer {
    fn update_universe(&mut self, viable: &[&Word], attempt_num: usize) {
        self.table = LetterFrequencyTable::build(viable);
        self.entropies = ChannelEntropies::from_table(&self.table);
        self.viable = viable_index(viable);
        self.attempt_num = attempt_num;
        trace!(
            "entropy tables rebuilt for {} viable words, attempt {attempt_num}",
            viable.len()
        );
    }

    fn score(&self, word: &Word) -> f64 {
        self.breakdown(word).total
    }
}
