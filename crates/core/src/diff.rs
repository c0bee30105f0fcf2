//! Alignment and diff result types

use serde::Serialize;
use std::fmt;

/// Kind of a word-level alignment step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditType {
    /// Reference and user word are equal
    Match,
    /// Both words present but different
    Substitute,
    /// Reference word absent from the user input
    Delete,
    /// User word absent from the reference
    Insert,
}

/// A single word-level alignment step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AlignmentOp<W> {
    Match { reference: W, user: W },
    Substitute { reference: W, user: W },
    Delete { reference: W },
    Insert { user: W },
}

impl<W> AlignmentOp<W> {
    pub fn edit_type(&self) -> EditType {
        match self {
            AlignmentOp::Match { .. } => EditType::Match,
            AlignmentOp::Substitute { .. } => EditType::Substitute,
            AlignmentOp::Delete { .. } => EditType::Delete,
            AlignmentOp::Insert { .. } => EditType::Insert,
        }
    }

    /// Reference word consumed by this step, if any
    pub fn reference(&self) -> Option<&W> {
        match self {
            AlignmentOp::Match { reference, .. }
            | AlignmentOp::Substitute { reference, .. }
            | AlignmentOp::Delete { reference } => Some(reference),
            AlignmentOp::Insert { .. } => None,
        }
    }

    /// User word consumed by this step, if any
    pub fn user(&self) -> Option<&W> {
        match self {
            AlignmentOp::Match { user, .. }
            | AlignmentOp::Substitute { user, .. }
            | AlignmentOp::Insert { user } => Some(user),
            AlignmentOp::Delete { .. } => None,
        }
    }
}

impl<W: fmt::Display> AlignmentOp<W> {
    /// Get a human-readable description of this step
    pub fn description(&self) -> String {
        match self {
            AlignmentOp::Match { user, .. } => format!("Match: \"{user}\""),
            AlignmentOp::Substitute { reference, user } => {
                format!("Substitute: \"{reference}\" → \"{user}\"")
            }
            AlignmentOp::Delete { reference } => format!("Delete: \"{reference}\""),
            AlignmentOp::Insert { user } => format!("Insert: \"{user}\""),
        }
    }
}

/// Ordered minimum-cost alignment of two word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment<W> {
    /// Steps in reference/user order
    pub ops: Vec<AlignmentOp<W>>,

    /// Total edit cost of the alignment
    pub cost: u32,
}

impl<W> Alignment<W> {
    pub fn new(ops: Vec<AlignmentOp<W>>, cost: u32) -> Self {
        Self { ops, cost }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignmentOp<W>> {
        self.ops.iter()
    }

    /// Reference words in order (reproduces the reference list)
    pub fn reference_words(&self) -> Vec<&W> {
        self.ops.iter().filter_map(AlignmentOp::reference).collect()
    }

    /// User words in order (reproduces the user list)
    pub fn user_words(&self) -> Vec<&W> {
        self.ops.iter().filter_map(AlignmentOp::user).collect()
    }

    /// Number of reference words covered by this alignment
    pub fn reference_len(&self) -> usize {
        self.ops.iter().filter(|op| op.reference().is_some()).count()
    }

    /// Count steps of a given kind
    pub fn count(&self, edit_type: EditType) -> usize {
        self.ops.iter().filter(|op| op.edit_type() == edit_type).count()
    }

    /// True when every step is a match
    pub fn is_exact(&self) -> bool {
        self.ops.iter().all(|op| op.edit_type() == EditType::Match)
    }
}

impl<'a, W> IntoIterator for &'a Alignment<W> {
    type Item = &'a AlignmentOp<W>;
    type IntoIter = std::slice::Iter<'a, AlignmentOp<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl<W: fmt::Display> fmt::Display for Alignment<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Alignment (cost {}) ===", self.cost)?;
        for (i, op) in self.ops.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, op.description())?;
        }
        Ok(())
    }
}

/// Rendering status of a single diff character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenStatus {
    Correct,
    Wrong,
    /// Letter is right but its case differs from the reference
    WrongCapitalization,
    /// Placeholder for a reference character the user did not type
    Missing,
    /// Character of a word absent from the reference
    Extra,
    /// Reference punctuation shown for orientation
    Punctuation,
    /// Separator between two aligned words
    WordBoundary,
    /// Separator between two missing-character placeholders
    CharSpace,
}

impl TokenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStatus::Correct => "correct",
            TokenStatus::Wrong => "wrong",
            TokenStatus::WrongCapitalization => "wrong-capitalization",
            TokenStatus::Missing => "missing",
            TokenStatus::Extra => "extra",
            TokenStatus::Punctuation => "punctuation",
            TokenStatus::WordBoundary => "word-boundary",
            TokenStatus::CharSpace => "char-space",
        }
    }

    /// One-column marker used when rendering a diff as plain text
    pub fn marker(&self) -> char {
        match self {
            TokenStatus::Correct | TokenStatus::WordBoundary | TokenStatus::CharSpace => ' ',
            TokenStatus::Wrong => '^',
            TokenStatus::WrongCapitalization => '~',
            TokenStatus::Missing => '?',
            TokenStatus::Extra => '+',
            TokenStatus::Punctuation => '.',
        }
    }

    /// Whether this status marks an error the learner made
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenStatus::Wrong
                | TokenStatus::WrongCapitalization
                | TokenStatus::Missing
                | TokenStatus::Extra
        )
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable character of a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffToken {
    pub character: char,
    pub status: TokenStatus,
}

impl DiffToken {
    pub fn new(character: char, status: TokenStatus) -> Self {
        Self { character, status }
    }

    pub fn missing() -> Self {
        Self::new('_', TokenStatus::Missing)
    }

    pub fn word_boundary() -> Self {
        Self::new(' ', TokenStatus::WordBoundary)
    }

    pub fn char_space() -> Self {
        Self::new(' ', TokenStatus::CharSpace)
    }
}

/// Concatenate the characters of a diff
pub fn render_text(tokens: &[DiffToken]) -> String {
    tokens.iter().map(|t| t.character).collect()
}

/// Marker line aligned under [`render_text`]
pub fn render_markers(tokens: &[DiffToken]) -> String {
    tokens.iter().map(|t| t.status.marker()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Alignment<String> {
        Alignment::new(
            vec![
                AlignmentOp::Match {
                    reference: "guten".to_string(),
                    user: "guten".to_string(),
                },
                AlignmentOp::Insert {
                    user: "schönen".to_string(),
                },
                AlignmentOp::Substitute {
                    reference: "tag".to_string(),
                    user: "tak".to_string(),
                },
                AlignmentOp::Delete {
                    reference: "noch".to_string(),
                },
            ],
            7,
        )
    }

    #[test]
    fn test_word_lists_reproduce_inputs() {
        let alignment = sample();
        assert_eq!(alignment.reference_words(), vec!["guten", "tag", "noch"]);
        assert_eq!(alignment.user_words(), vec!["guten", "schönen", "tak"]);
        assert_eq!(alignment.reference_len(), 3);
    }

    #[test]
    fn test_counts() {
        let alignment = sample();
        assert_eq!(alignment.count(EditType::Match), 1);
        assert_eq!(alignment.count(EditType::Insert), 1);
        assert!(!alignment.is_exact());
    }

    #[test]
    fn test_description() {
        let op = AlignmentOp::Substitute {
            reference: "Tag".to_string(),
            user: "Tak".to_string(),
        };
        assert_eq!(op.description(), "Substitute: \"Tag\" → \"Tak\"");
        assert!(sample().to_string().contains("4. Delete: \"noch\""));
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&TokenStatus::WrongCapitalization).unwrap();
        assert_eq!(json, "\"wrong-capitalization\"");
        assert_eq!(TokenStatus::CharSpace.to_string(), "char-space");
    }

    #[test]
    fn test_op_serializes_tagged() {
        let json = serde_json::to_value(AlignmentOp::Insert { user: "x" }).unwrap();
        assert_eq!(json["type"], "insert");
        assert_eq!(json["user"], "x");
    }

    #[test]
    fn test_render() {
        let tokens = vec![
            DiffToken::new('a', TokenStatus::Correct),
            DiffToken::word_boundary(),
            DiffToken::new('b', TokenStatus::Wrong),
            DiffToken::char_space(),
            DiffToken::missing(),
        ];
        assert_eq!(render_text(&tokens), "a b _");
        assert_eq!(render_markers(&tokens), "  ^ ?");
    }
}
