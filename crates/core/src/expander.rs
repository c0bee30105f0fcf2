//! Expansion of a word alignment into renderable character tokens

use crate::config::ComparisonOptions;
use crate::diff::{Alignment, AlignmentOp, DiffToken, TokenStatus};
use crate::tokenizers::Word;

/// How a substituted user word relates to its reference word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationKind {
    /// User word is a tail of the reference; this many leading chars are missing
    MissingPrefix(usize),
    /// User word is a head of the reference; this many trailing chars are missing
    MissingSuffix(usize),
    /// No overlap credit
    None,
}

/// Classify a substitution by the partial-overlap heuristic
///
/// The suffix check runs first, so a user word that is both a head and a
/// tail of the reference counts as a missing prefix.
pub fn classify_truncation(reference: &str, user: &str) -> TruncationKind {
    if user.is_empty() || reference == user {
        return TruncationKind::None;
    }

    let shortfall = reference
        .chars()
        .count()
        .saturating_sub(user.chars().count());

    if reference.ends_with(user) {
        TruncationKind::MissingPrefix(shortfall)
    } else if reference.starts_with(user) {
        TruncationKind::MissingSuffix(shortfall)
    } else {
        TruncationKind::None
    }
}

/// Expands word alignments into character-level [`DiffToken`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffExpander {
    options: ComparisonOptions,
}

impl DiffExpander {
    pub fn new(options: ComparisonOptions) -> Self {
        Self { options }
    }

    pub fn expand(&self, alignment: &Alignment<Word>) -> Vec<DiffToken> {
        let mut tokens = Vec::new();

        for (index, op) in alignment.iter().enumerate() {
            if index > 0 {
                tokens.push(DiffToken::word_boundary());
            }

            match op {
                AlignmentOp::Match { reference, user } => {
                    self.push_match(&mut tokens, reference, user)
                }
                AlignmentOp::Substitute { reference, user } => {
                    push_substitution(&mut tokens, reference, user)
                }
                AlignmentOp::Delete { reference } => {
                    push_placeholders(&mut tokens, reference.char_len(), false)
                }
                AlignmentOp::Insert { user } => {
                    push_chars(&mut tokens, &user.display, TokenStatus::Extra)
                }
            }
        }

        tokens
    }

    /// A case-only difference marks every character of the word
    /// `wrong-capitalization`, including the ones whose case is right.
    fn push_match(&self, tokens: &mut Vec<DiffToken>, reference: &Word, user: &Word) {
        let status = if !self.options.ignore_case && reference.differs_only_in_case(user) {
            TokenStatus::WrongCapitalization
        } else {
            TokenStatus::Correct
        };
        push_chars(tokens, &user.display, status);
    }
}

fn push_substitution(tokens: &mut Vec<DiffToken>, reference: &Word, user: &Word) {
    match classify_truncation(&reference.folded, &user.folded) {
        TruncationKind::MissingPrefix(count) => {
            push_placeholders(tokens, count, false);
            push_chars(tokens, &user.display, TokenStatus::Wrong);
        }
        TruncationKind::MissingSuffix(count) => {
            push_chars(tokens, &user.display, TokenStatus::Wrong);
            push_placeholders(tokens, count, true);
        }
        TruncationKind::None => push_chars(tokens, &user.display, TokenStatus::Wrong),
    }
}

fn push_chars(tokens: &mut Vec<DiffToken>, text: &str, status: TokenStatus) {
    tokens.extend(text.chars().map(|c| DiffToken::new(c, status)));
}

/// `count` underscores separated by char spaces; `leading_space` also puts
/// one before the first underscore
fn push_placeholders(tokens: &mut Vec<DiffToken>, count: usize, leading_space: bool) {
    for k in 0..count {
        if k > 0 || leading_space {
            tokens.push(DiffToken::char_space());
        }
        tokens.push(DiffToken::missing());
    }
}

/// Expand an alignment with the given options
pub fn expand(alignment: &Alignment<Word>, options: ComparisonOptions) -> Vec<DiffToken> {
    DiffExpander::new(options).expand(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{render_markers, render_text};

    fn statuses(tokens: &[DiffToken]) -> Vec<TokenStatus> {
        tokens.iter().map(|t| t.status).collect()
    }

    fn single(op: AlignmentOp<Word>) -> Alignment<Word> {
        Alignment::new(vec![op], 0)
    }

    #[test]
    fn test_classify_truncation() {
        assert_eq!(classify_truncation("führen", "führ"), TruncationKind::MissingSuffix(2));
        assert_eq!(classify_truncation("gehen", "hen"), TruncationKind::MissingPrefix(2));
        assert_eq!(classify_truncation("haus", "maus"), TruncationKind::None);
        assert_eq!(classify_truncation("haus", ""), TruncationKind::None);
        assert_eq!(classify_truncation("haus", "haus"), TruncationKind::None);
    }

    #[test]
    fn test_suffix_check_wins() {
        // "ab" is both a head and a tail of "abab"
        assert_eq!(classify_truncation("abab", "ab"), TruncationKind::MissingPrefix(2));
    }

    #[test]
    fn test_missing_suffix_rendering() {
        let alignment = single(AlignmentOp::Substitute {
            reference: Word::new("Führen"),
            user: Word::new("Führ"),
        });
        let tokens = DiffExpander::default().expand(&alignment);

        assert_eq!(render_text(&tokens), "Führ _ _");
        assert_eq!(
            statuses(&tokens),
            vec![
                TokenStatus::Wrong,
                TokenStatus::Wrong,
                TokenStatus::Wrong,
                TokenStatus::Wrong,
                TokenStatus::CharSpace,
                TokenStatus::Missing,
                TokenStatus::CharSpace,
                TokenStatus::Missing,
            ]
        );
    }

    #[test]
    fn test_missing_prefix_rendering() {
        let alignment = single(AlignmentOp::Substitute {
            reference: Word::new("gehen"),
            user: Word::new("hen"),
        });
        let tokens = expand(&alignment, ComparisonOptions::default());

        assert_eq!(render_text(&tokens), "_ _hen");
        assert_eq!(render_markers(&tokens), "? ?^^^");
    }

    #[test]
    fn test_plain_substitution_has_no_padding() {
        let alignment = single(AlignmentOp::Substitute {
            reference: Word::new("Haus"),
            user: Word::new("Maus"),
        });
        let tokens = DiffExpander::default().expand(&alignment);

        assert_eq!(render_text(&tokens), "Maus");
        assert!(tokens.iter().all(|t| t.status == TokenStatus::Wrong));
    }

    #[test]
    fn test_delete_and_insert() {
        let alignment = Alignment::new(
            vec![
                AlignmentOp::Delete {
                    reference: Word::new("nach"),
                },
                AlignmentOp::Insert {
                    user: Word::new("ja"),
                },
            ],
            4,
        );
        let tokens = DiffExpander::default().expand(&alignment);

        assert_eq!(render_text(&tokens), "_ _ _ _ ja");
        assert_eq!(render_markers(&tokens), "? ? ? ? ++");
        assert_eq!(tokens[7].status, TokenStatus::WordBoundary);
    }

    #[test]
    fn test_match_case_ignored() {
        let alignment = single(AlignmentOp::Match {
            reference: Word::new("Haus"),
            user: Word::new("haus"),
        });
        let tokens = DiffExpander::default().expand(&alignment);

        assert_eq!(render_text(&tokens), "haus");
        assert!(tokens.iter().all(|t| t.status == TokenStatus::Correct));
    }

    #[test]
    fn test_match_case_sensitive() {
        let alignment = single(AlignmentOp::Match {
            reference: Word::new("Haus"),
            user: Word::new("haus"),
        });
        let tokens = expand(&alignment, ComparisonOptions::case_sensitive());

        assert_eq!(tokens.len(), 4);
        assert!(tokens
            .iter()
            .all(|t| t.status == TokenStatus::WrongCapitalization));
    }

    #[test]
    fn test_case_mismatch_marks_whole_word() {
        let alignment = single(AlignmentOp::Match {
            reference: Word::new("Haus"),
            user: Word::new("HAus"),
        });
        let tokens = expand(&alignment, ComparisonOptions::case_sensitive());

        assert_eq!(render_text(&tokens), "HAus");
        assert_eq!(render_markers(&tokens), "~~~~");
    }

    #[test]
    fn test_identical_match_is_correct_when_case_sensitive() {
        let alignment = single(AlignmentOp::Match {
            reference: Word::new("Haus"),
            user: Word::new("Haus"),
        });
        let tokens = expand(&alignment, ComparisonOptions::case_sensitive());
        assert!(tokens.iter().all(|t| t.status == TokenStatus::Correct));
    }

    #[test]
    fn test_no_boundary_before_first_op() {
        let alignment = Alignment::new(
            vec![
                AlignmentOp::Match {
                    reference: Word::new("a"),
                    user: Word::new("a"),
                },
                AlignmentOp::Match {
                    reference: Word::new("b"),
                    user: Word::new("b"),
                },
            ],
            0,
        );
        let tokens = DiffExpander::default().expand(&alignment);

        assert_eq!(tokens.first().map(|t| t.status), Some(TokenStatus::Correct));
        assert_eq!(render_text(&tokens), "a b");
    }

    #[test]
    fn test_empty_alignment() {
        assert!(DiffExpander::default().expand(&Alignment::new(vec![], 0)).is_empty());
    }
}
