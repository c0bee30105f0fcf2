//! Word tokenization
//!
//! Alignment compares case-folded words while rendering needs the words as
//! typed. A [`Word`] carries both forms so the two can never drift apart.

use serde::Serialize;
use std::fmt;

/// A word token with its folded (comparison) and display (as typed) forms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    /// Lowercased form used for alignment decisions
    pub folded: String,

    /// Original-case form used for rendering
    pub display: String,
}

impl Word {
    /// Create a word from its display form
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        Self {
            folded: display.to_lowercase(),
            display,
        }
    }

    /// Number of characters in the display form
    pub fn char_len(&self) -> usize {
        self.display.chars().count()
    }

    /// Same word with a different capitalization
    pub fn differs_only_in_case(&self, other: &Word) -> bool {
        self.folded == other.folded && self.display != other.display
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for Word {
    fn from(display: &str) -> Self {
        Self::new(display)
    }
}

/// Splits cleaned text into whitespace-separated words
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Split on whitespace runs, discarding empty tokens
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Split and pair each token with its folded form
    pub fn words(&self, text: &str) -> Vec<Word> {
        text.split_whitespace().map(Word::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_forms() {
        let word = Word::new("Führen");
        assert_eq!(word.folded, "führen");
        assert_eq!(word.display, "Führen");
        assert_eq!(word.char_len(), 6);
        assert_eq!(word.to_string(), "Führen");
    }

    #[test]
    fn test_case_only_difference() {
        let a = Word::new("Haus");
        let b = Word::from("haus");
        assert!(a.differs_only_in_case(&b));
        assert!(!a.differs_only_in_case(&a.clone()));
        assert!(!a.differs_only_in_case(&Word::new("Maus")));
    }

    #[test]
    fn test_split_discards_empty_tokens() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(tokenizer.split("  a \t b\n\nc "), vec!["a", "b", "c"]);
        assert!(tokenizer.split("   ").is_empty());
        assert!(tokenizer.words("").is_empty());
    }

    #[test]
    fn test_words_pair_forms() {
        let words = WordTokenizer::new().words("Ich gehe");
        assert_eq!(words[0].folded, "ich");
        assert_eq!(words[0].display, "Ich");
        assert_eq!(words[1], Word::new("gehe"));
    }
}
