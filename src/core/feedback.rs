//! Per-letter feedback for a guess
//!
//! Feedback is one [`Mark`] per position. The text form uses one character per
//! mark: `g` (correct), `y` (present) and `w` (absent).

use super::word::{ALPHABET_SIZE, WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// Signal for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Letter does not occur (at this occurrence count)
    Absent,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter is in the exact position
    Correct,
}

impl Mark {
    /// Parse a single feedback symbol
    ///
    /// Accepts `g`/🟩 for correct, `y`/🟨 for present and `w`/`b`/`-`/`_`/⬜ for absent,
    /// case-insensitively.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'w' | 'W' | 'b' | 'B' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Single-character code used in the text form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'w',
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether the mark confirms an occurrence of the letter
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly {WORD_LEN} symbols, got {0}")]
    WrongLength(usize),
    #[error("invalid feedback symbol '{0}', use g (correct), y (present) or w (absent)")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Build feedback from a slice of marks
    ///
    /// # Errors
    /// Returns `FeedbackError::WrongLength` unless the slice has [`WORD_LEN`] marks.
    pub fn from_marks(marks: &[Mark]) -> Result<Self, FeedbackError> {
        let marks: [Mark; WORD_LEN] = marks
            .try_into()
            .map_err(|_| FeedbackError::WrongLength(marks.len()))?;
        Ok(Self(marks))
    }

    /// Compute the feedback the game gives for `guess` when `secret` is the answer
    ///
    /// Two passes: exact matches are marked first and consume their letter from
    /// the secret's pool, then remaining letters are marked present while the
    /// pool still holds a copy.
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::{Feedback, Word};
    ///
    /// let secret = Word::new("glass").unwrap();
    /// let guess = Word::new("sassy").unwrap();
    /// assert_eq!(Feedback::evaluate(&secret, &guess).to_string(), "yywgw");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut pool = [0u8; ALPHABET_SIZE];

        // First pass: greens, everything else goes into the pool
        for (i, (&g, &s)) in guess.codes().iter().zip(secret.codes()).enumerate() {
            if g == s {
                marks[i] = Mark::Correct;
            } else {
                pool[usize::from(s)] += 1;
            }
        }

        // Second pass: yellows drawn from what is left
        for (i, &g) in guess.codes().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            let available = &mut pool[usize::from(g)];
            if *available > 0 {
                marks[i] = Mark::Present;
                *available -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.code()))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse "gywwg" style feedback (emoji squares are accepted too)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(|ch| Mark::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_marks(&marks)
    }
}
