//! Word list loading utilities
//!
//! Dictionaries come from `<dir>/<language>.txt` when a directory is configured,
//! otherwise from the lists compiled into the binary.

use super::embedded::ENGLISH;
use crate::core::{Dictionary, Word};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no word bank found for language '{language}' (searched: {searched})")]
    NotFound { language: String, searched: String },
    #[error("failed to read word bank {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word bank for '{0}' contains no valid words")]
    Empty(String),
}

/// Languages bundled with the binary
pub const EMBEDDED_LANGUAGES: &[&str] = &["english"];

/// Load the dictionary for a language
///
/// `dir` is searched first for `<language>.txt`; bundled lists are the
/// fallback.
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if neither source has the language,
/// `DictionaryError::Io` if the file exists but cannot be read and
/// `DictionaryError::Empty` if no line holds a valid word.
///
/// # Examples
/// ```
/// use wordle_buddy::wordlists::loader::load;
///
/// let dictionary = load("english", None).unwrap();
/// assert!(dictionary.contains("crane"));
///
/// assert!(load("klingon", None).is_err());
/// ```
pub fn load(language: &str, dir: Option<&Path>) -> Result<Dictionary, DictionaryError> {
    let language = language.trim().to_lowercase();
    let mut searched = Vec::new();

    if let Some(dir) = dir {
        let path = dir.join(format!("{language}.txt"));
        if path.is_file() {
            let words = load_from_file(&path).map_err(|source| DictionaryError::Io {
                path: path.clone(),
                source,
            })?;
            return finish(&language, words, &path.display().to_string());
        }
        searched.push(path.display().to_string());
    }

    match language.as_str() {
        "english" => finish(&language, words_from_slice(ENGLISH), "embedded"),
        _ => {
            searched.push(format!("embedded ({})", EMBEDDED_LANGUAGES.join(", ")));
            Err(DictionaryError::NotFound {
                language,
                searched: searched.join(", "),
            })
        }
    }
}

fn finish(language: &str, words: Vec<Word>, source: &str) -> Result<Dictionary, DictionaryError> {
    if words.is_empty() {
        return Err(DictionaryError::Empty(language.to_string()));
    }
    let dictionary = Dictionary::new(language, words);
    info!(
        "loaded {} {language} words from {source}",
        dictionary.len()
    );
    Ok(dictionary)
}

/// Load words from a file
///
/// Returns the valid entries; blank lines and `#` comments are ignored and
/// invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let words = words_from_slice(&lines);
    let skipped = lines.len() - words.len();
    if skipped > 0 {
        warn!(
            "skipped {skipped} invalid entries in {}",
            path.as_ref().display()
        );
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_buddy::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Scratch directory removed on drop
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "wordle_buddy_{name}_{}",
                std::process::id()
            ));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn path(&self) -> &Path {
            &self.0
        }

        fn write(&self, file: &str, content: &str) {
            let mut handle = fs::File::create(self.0.join(file)).unwrap();
            handle.write_all(content.as_bytes()).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn loads_embedded_english() {
        let dictionary = load("English", None).unwrap();
        assert_eq!(dictionary.language(), "english");
        assert!(dictionary.len() > 100);
        assert!(dictionary.contains("crane"));
    }

    #[test]
    fn unknown_language_not_found() {
        let err = load("klingon", None).unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound { ref language, .. } if language == "klingon"));
    }

    #[test]
    fn loads_language_from_directory() {
        let dir = TempDir::new("spanish");
        dir.write("spanish.txt", "# palabras\nperro\n\n GATOS \nárbol\nmesas\nperro\n");

        let dictionary = load("spanish", Some(dir.path())).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["perro", "gatos", "mesas"]);
    }

    #[test]
    fn directory_overrides_embedded() {
        let dir = TempDir::new("override");
        dir.write("english.txt", "crane\nslate\n");

        let dictionary = load("english", Some(dir.path())).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn missing_file_falls_back_or_fails() {
        let dir = TempDir::new("missing");
        assert!(load("english", Some(dir.path())).is_ok());

        let err = load("german", Some(dir.path())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("german"));
        assert!(message.contains("german.txt"));
    }

    #[test]
    fn file_without_valid_words_is_empty() {
        let dir = TempDir::new("empty");
        dir.write("german.txt", "straße\nzu\n");

        assert!(matches!(
            load("german", Some(dir.path())),
            Err(DictionaryError::Empty(ref language)) if language == "german"
        ));
    }
}
