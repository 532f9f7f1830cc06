//! Ranking of scored guesses
//!
//! Picks the best and worst words from a scored universe. Ties are broken by
//! word text so rankings are reproducible.

use super::scoring::ScoredWord;
use std::cmp::Ordering;

/// Outcome of ranking a scoring universe
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// Nothing left to guess
    NoViableGuesses,
    Ranked {
        /// Highest scores first
        best: Vec<ScoredWord<'a>>,
        /// Lowest scores first
        worst: Vec<ScoredWord<'a>>,
    },
}

impl<'a> Selection<'a> {
    /// The top-ranked guess, if any
    #[must_use]
    pub fn top(&self) -> Option<&ScoredWord<'a>> {
        match self {
            Self::NoViableGuesses => None,
            Self::Ranked { best, .. } => best.first(),
        }
    }

    #[must_use]
    pub fn best(&self) -> &[ScoredWord<'a>] {
        match self {
            Self::NoViableGuesses => &[],
            Self::Ranked { best, .. } => best,
        }
    }

    #[must_use]
    pub fn worst(&self) -> &[ScoredWord<'a>] {
        match self {
            Self::NoViableGuesses => &[],
            Self::Ranked { worst, .. } => worst,
        }
    }
}

fn by_score_desc(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.word.cmp(b.word))
}

fn by_score_asc(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    a.score.total_cmp(&b.score).then_with(|| a.word.cmp(b.word))
}

/// Take the `num_best` highest and `num_worst` lowest scoring words
///
/// Requests larger than the universe are clamped. An empty universe yields
/// [`Selection::NoViableGuesses`].
///
/// # Examples
/// ```
/// use wordle_buddy::core::Word;
/// use wordle_buddy::solver::{ScoredWord, Selection, select};
///
/// let words = ["crane", "slate", "fuzzy"].map(|w| Word::new(w).unwrap());
/// let scored = vec![
///     ScoredWord { word: &words[0], score: 4.0 },
///     ScoredWord { word: &words[1], score: 4.0 },
///     ScoredWord { word: &words[2], score: 0.5 },
/// ];
///
/// let selection = select(scored, 2, 1);
/// assert_eq!(selection.top().unwrap().word.text(), "crane");
/// assert_eq!(selection.worst()[0].word.text(), "fuzzy");
///
/// assert_eq!(select(Vec::new(), 5, 3), Selection::NoViableGuesses);
/// ```
#[must_use]
pub fn select(mut scored: Vec<ScoredWord<'_>>, num_best: usize, num_worst: usize) -> Selection<'_> {
    if scored.is_empty() {
        return Selection::NoViableGuesses;
    }

    let num_best = num_best.min(scored.len());
    let num_worst = num_worst.min(scored.len());

    let mut worst = scored.clone();
    worst.sort_by(by_score_asc);
    worst.truncate(num_worst);

    scored.sort_by(by_score_desc);
    scored.truncate(num_best);

    Selection::Ranked {
        best: scored,
        worst,
    }
}
