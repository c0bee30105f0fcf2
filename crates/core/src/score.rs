//! Word and character statistics

use serde::{Deserialize, Serialize};

use crate::diff::{Alignment, AlignmentOp, DiffToken, TokenStatus};
use crate::tokenizers::Word;

/// Word-level result of one comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStats {
    pub correct_words: usize,
    pub wrong_words: usize,
    /// Always the number of reference words
    pub total_words: usize,
}

impl WordStats {
    /// Share of reference words reproduced correctly, in `0.0..=1.0`
    pub fn accuracy(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.correct_words as f64 / self.total_words as f64
        }
    }

    /// Accuracy as a whole percentage, rounded half up
    pub fn accuracy_percent(&self) -> u32 {
        percent(self.correct_words, self.total_words)
    }
}

/// Reduce an alignment to word counts
///
/// Extra words typed by the user are not penalized.
pub fn score<W>(alignment: &Alignment<W>) -> WordStats {
    let mut stats = WordStats {
        total_words: alignment.reference_len(),
        ..WordStats::default()
    };

    for op in alignment {
        match op {
            AlignmentOp::Match { .. } => stats.correct_words += 1,
            AlignmentOp::Substitute { .. } | AlignmentOp::Delete { .. } => stats.wrong_words += 1,
            AlignmentOp::Insert { .. } => {}
        }
    }

    stats
}

/// Per-character tallies of a rendered diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharStats {
    pub correct: usize,
    pub wrong: usize,
    pub wrong_capitalization: usize,
    pub extra: usize,
    pub missing: usize,
    /// Sum of reference word lengths, separators excluded
    pub total_reference_chars: usize,
}

impl CharStats {
    pub fn from_diff(tokens: &[DiffToken], alignment: &Alignment<Word>) -> Self {
        let mut stats = CharStats {
            total_reference_chars: alignment
                .reference_words()
                .into_iter()
                .map(Word::char_len)
                .sum(),
            ..CharStats::default()
        };

        for token in tokens {
            match token.status {
                TokenStatus::Correct => stats.correct += 1,
                TokenStatus::Wrong => stats.wrong += 1,
                TokenStatus::WrongCapitalization => stats.wrong_capitalization += 1,
                TokenStatus::Extra => stats.extra += 1,
                TokenStatus::Missing => stats.missing += 1,
                TokenStatus::Punctuation | TokenStatus::WordBoundary | TokenStatus::CharSpace => {}
            }
        }

        stats
    }

    pub fn errors(&self) -> usize {
        self.wrong + self.wrong_capitalization + self.extra + self.missing
    }
}

/// Running totals over the sentences of a practice session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_correct_words: usize,
    pub total_wrong_words: usize,
    pub total_words: usize,
    pub sentence_count: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the result of one sentence
    pub fn record(&mut self, stats: &WordStats) {
        self.total_correct_words += stats.correct_words;
        self.total_wrong_words += stats.wrong_words;
        self.total_words += stats.total_words;
        self.sentence_count += 1;
    }

    pub fn accuracy_percent(&self) -> u32 {
        percent(self.total_correct_words, self.total_words)
    }

    pub fn is_empty(&self) -> bool {
        self.sentence_count == 0
    }
}

impl<'a> Extend<&'a WordStats> for SessionStats {
    fn extend<I: IntoIterator<Item = &'a WordStats>>(&mut self, iter: I) {
        for stats in iter {
            self.record(stats);
        }
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
