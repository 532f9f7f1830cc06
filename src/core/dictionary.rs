//! The immutable word list a game is played over

use super::word::Word;
use rustc_hash::FxHashMap;

/// Ordered collection of unique words for one language
///
/// Built once and never mutated; sessions share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of any duplicate
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::{Dictionary, Word};
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new("english", words);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("slate"));
    /// ```
    pub fn new(language: impl Into<String>, words: impl IntoIterator<Item = Word>) -> Self {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if index.contains_key(word.text()) {
                continue;
            }
            index.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        Self {
            language: language.into(),
            words: unique,
            index,
        }
    }

    /// Language code the words were loaded for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a dictionary index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Dictionary index of a word, if present
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Look up the stored word for some text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index_of(text).map(|i| &self.words[i])
    }
}
