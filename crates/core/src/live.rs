//! Character-by-character feedback while the learner is still typing
//!
//! Unlike [`compare`](crate::compare) this does no word alignment: it walks
//! the reference and consumes user characters one at a time, so a single
//! missing letter shifts everything after it. That is cheap enough to run
//! on every keystroke.

use unicode_normalization::UnicodeNormalization;

use crate::config::ComparisonOptions;
use crate::diff::{DiffToken, TokenStatus};
use crate::digraph::normalize_digraphs;
use crate::normalizers::is_sentence_punctuation;

fn skipped(ch: char) -> bool {
    is_sentence_punctuation(ch) || ch.is_whitespace()
}

fn chars_equal(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}

/// Compare a partially typed input against the reference, one char at a time
pub fn compare_live(reference: &str, user: &str, options: ComparisonOptions) -> Vec<DiffToken> {
    let user = normalize_digraphs(&user.nfc().collect::<String>());
    let mut user_chars = user.chars().filter(|&c| !skipped(c));
    let mut tokens = Vec::with_capacity(reference.len());

    for ref_char in reference.nfc() {
        if is_sentence_punctuation(ref_char) {
            tokens.push(DiffToken::new(ref_char, TokenStatus::Punctuation));
            continue;
        }
        if ref_char.is_whitespace() {
            tokens.push(DiffToken::word_boundary());
            continue;
        }

        tokens.push(match user_chars.next() {
            Some(user_char) if chars_equal(ref_char, user_char, options.ignore_case) => {
                DiffToken::new(ref_char, TokenStatus::Correct)
            }
            Some(user_char) => DiffToken::new(user_char, TokenStatus::Wrong),
            None => DiffToken::missing(),
        });
    }

    tracing::trace!(tokens = tokens.len(), "live feedback computed");
    tokens
}
