//! Text normalizers
//!
//! Provides the `Normalizer` trait and the implementations the cleaner chains
//! together. Each normalizer is a pure `&str -> String` transformation.

use unicode_normalization::UnicodeNormalization;

/// Trait for text normalizers
pub trait Normalizer: Send + Sync {
    /// Normalize the input text
    fn normalize(&self, input: &str) -> String;

    /// Get the name of this normalizer
    fn name(&self) -> &str;

    /// Get metadata about this normalizer (e.g., configuration)
    fn metadata(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Clone this normalizer into a Box
    fn clone_box(&self) -> Box<dyn Normalizer>;
}

// Implement Clone for Box<dyn Normalizer>
impl Clone for Box<dyn Normalizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Characters removed when punctuation is ignored: sentence punctuation,
/// parentheses and every quotation mark style (straight, curly, low-9,
/// guillemets, ornament and CJK corner brackets).
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '"', '\'', '\u{2018}', '\u{2019}', '\u{201A}',
    '\u{201B}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{2039}', '\u{203A}', '\u{00AB}',
    '\u{00BB}', '\u{275B}', '\u{275C}', '\u{275D}', '\u{275E}', '\u{300C}', '\u{300D}', '\u{300E}',
    '\u{300F}',
];

/// Punctuation shown greyed-out by live feedback
pub const SENTENCE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')'];

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

pub fn is_sentence_punctuation(ch: char) -> bool {
    SENTENCE_PUNCTUATION.contains(&ch)
}

// ============================================================================
// Built-in Normalizers
// ============================================================================

/// Converts all text to lowercase
#[derive(Clone)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Normalizes whitespace: collapses runs into one space, optionally trims
#[derive(Clone)]
pub struct WhitespaceNormalizer {
    /// Whether to collapse multiple consecutive whitespaces into one
    pub collapse: bool,
    /// Whether to trim leading/trailing whitespace
    pub trim: bool,
}

impl Default for WhitespaceNormalizer {
    fn default() -> Self {
        Self {
            collapse: true,
            trim: false,
        }
    }
}

impl WhitespaceNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, input: &str) -> String {
        let source = if self.trim { input.trim() } else { input };
        let mut normalized = String::with_capacity(source.len());
        let mut in_whitespace = false;

        for ch in source.chars() {
            if ch.is_whitespace() {
                if !self.collapse || !in_whitespace {
                    normalized.push(' ');
                }
                in_whitespace = true;
            } else {
                normalized.push(ch);
                in_whitespace = false;
            }
        }

        normalized
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![
            ("collapse".to_string(), self.collapse.to_string()),
            ("trim".to_string(), self.trim.to_string()),
        ]
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Removes punctuation and quotation marks wherever they occur
#[derive(Clone)]
pub struct RemovePunctuation;

impl Normalizer for RemovePunctuation {
    fn normalize(&self, input: &str) -> String {
        input.chars().filter(|&ch| !is_punctuation(ch)).collect()
    }

    fn name(&self) -> &str {
        "remove_punctuation"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Composes combining sequences (NFC), so `u` + U+0308 becomes `ü`
#[derive(Clone)]
pub struct UnicodeCompose;

impl Normalizer for UnicodeCompose {
    fn normalize(&self, input: &str) -> String {
        input.nfc().collect()
    }

    fn name(&self) -> &str {
        "unicode_compose"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = Lowercase;
        assert_eq!(normalizer.normalize("Hello Wörld ÄÖÜ"), "hello wörld äöü");
        assert_eq!(normalizer.name(), "lowercase");
    }

    #[test]
    fn test_whitespace_collapse() {
        let normalizer = WhitespaceNormalizer::new().with_collapse(true);
        assert_eq!(normalizer.normalize("Hello  \t\n World "), "Hello World ");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        let normalizer = WhitespaceNormalizer::new().with_trim(true);
        assert_eq!(normalizer.normalize("   Ich   gehe \n"), "Ich gehe");
        assert_eq!(normalizer.normalize(" \t "), "");
    }

    #[test]
    fn test_whitespace_without_collapse() {
        let normalizer = WhitespaceNormalizer::new().with_collapse(false);
        assert_eq!(normalizer.normalize("a\t\tb"), "a  b");
        assert_eq!(
            normalizer.metadata(),
            vec![
                ("collapse".to_string(), "false".to_string()),
                ("trim".to_string(), "false".to_string())
            ]
        );
    }

    #[test]
    fn test_remove_punctuation() {
        assert_eq!(RemovePunctuation.normalize("Hallo, Welt!"), "Hallo Welt");
        assert_eq!(RemovePunctuation.normalize("(ja); nein: vielleicht?"), "ja nein vielleicht");
    }

    #[test]
    fn test_remove_quotation_marks() {
        let input = "„Guten Tag“, sagte er. «Bonjour» ‹x› 「東京」 『y』 ‚z‘ \"q\" 'r' ❛s❜ ❝t❞";
        assert_eq!(
            RemovePunctuation.normalize(input),
            "Guten Tag sagte er Bonjour x 東京 y z q r s t"
        );
    }

    #[test]
    fn test_punctuation_inside_words() {
        assert_eq!(RemovePunctuation.normalize("geht's z.B."), "gehts zB");
    }

    #[test]
    fn test_hyphen_is_kept() {
        assert_eq!(RemovePunctuation.normalize("E-Mail"), "E-Mail");
    }

    #[test]
    fn test_unicode_compose() {
        let decomposed = "Tu\u{0308}r";
        assert_eq!(UnicodeCompose.normalize(decomposed), "Tür");
        assert_eq!(UnicodeCompose.normalize("Tür"), "Tür");
    }

    #[test]
    fn test_sentence_punctuation_is_subset() {
        assert!(SENTENCE_PUNCTUATION.iter().all(|&c| is_punctuation(c)));
        assert!(!is_sentence_punctuation('"'));
        assert!(is_punctuation('"'));
    }

    #[test]
    fn test_boxed_clone() {
        let boxed: Box<dyn Normalizer> = Box::new(WhitespaceNormalizer::new().with_trim(true));
        let cloned = boxed.clone();
        assert_eq!(cloned.name(), "whitespace");
        assert_eq!(cloned.normalize("  a  "), "a");
    }
}
