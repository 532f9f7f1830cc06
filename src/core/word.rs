//! Word representation
//!
//! A Word keeps its lowercase text for display and a fixed array of letter
//! codes (`0..26`) for the bulk filtering and scoring passes.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of distinct letter codes (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// Letter codes of the vowels `a e i o u`
const VOWELS: [u8; 5] = [0, 4, 8, 14, 20];

/// A fixed-length guessable word
///
/// Ordering and equality follow the text, so sorting words is lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    codes: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word '{0}' contains characters outside a-z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from text, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly [`WORD_LEN`] ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut codes = [0u8; WORD_LEN];
        for (slot, byte) in codes.iter_mut().zip(text.bytes()) {
            *slot = byte - b'a';
        }

        Ok(Self { text, codes })
    }

    /// The word as lowercase text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter codes, one per position
    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &[u8; WORD_LEN] {
        &self.codes
    }

    /// Letter code at `position`
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn code_at(&self, position: usize) -> u8 {
        self.codes[position]
    }

    /// Number of times the letter code occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, code: u8) -> usize {
        self.codes.iter().filter(|&&c| c == code).count()
    }

    /// Check if the word contains a letter code
    #[inline]
    #[must_use]
    pub fn has_code(&self, code: u8) -> bool {
        self.codes.contains(&code)
    }

    /// Occurrence count for every letter code
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &code in &self.codes {
            counts[usize::from(code)] += 1;
        }
        counts
    }
}

/// Whether a letter code is one of `a e i o u`
#[inline]
#[must_use]
pub fn is_vowel(code: u8) -> bool {
    VOWELS.contains(&code)
}

/// Character for a letter code
#[inline]
#[must_use]
pub fn code_to_char(code: u8) -> char {
    char::from(b'a' + code)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.codes(), &[2, 17, 0, 13, 4]);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
        assert_eq!(Word::new(" slate\n").unwrap().text(), "slate");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("cranes"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("cran"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("señor").is_err());
    }

    #[test]
    fn counts_repeated_letters() {
        let word = Word::new("sassy").unwrap();
        assert_eq!(word.count_of(b's' - b'a'), 3);
        assert_eq!(word.count_of(b'a' - b'a'), 1);
        assert_eq!(word.count_of(b'z' - b'a'), 0);

        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b's' - b'a')], 3);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), WORD_LEN);
    }

    #[test]
    fn vowels_are_classified() {
        let vowels: String = (0..26u8)
            .filter(|&c| is_vowel(c))
            .map(code_to_char)
            .collect();
        assert_eq!(vowels, "aeiou");
    }

    #[test]
    fn words_order_lexicographically() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("irate").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "irate", "slate"]);
    }

    #[test]
    fn word_display() {
        let word: Word = "CRANE".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
