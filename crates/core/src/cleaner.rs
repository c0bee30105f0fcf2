//! Sentence cleaning: punctuation stripping, whitespace collapsing, case folding
//!
//! The cleaner never repairs digraphs. User text goes through
//! [`normalize_digraphs`](crate::digraph::normalize_digraphs) first, reference
//! text is taken as already correct.

use serde::Serialize;

use crate::config::ComparisonOptions;
use crate::normalizers::{Lowercase, RemovePunctuation, UnicodeCompose, WhitespaceNormalizer};
use crate::pipeline::{LayerSet, TextPipeline};
use crate::tokenizers::{Word, WordTokenizer};

/// A cleaned sentence and its word tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    text: String,
    words: Vec<String>,
}

impl NormalizedText {
    fn new(text: String) -> Self {
        let words = WordTokenizer::new().split(&text);
        Self { text, words }
    }

    /// The cleaned string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word tokens in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Cleans sentences according to a set of [`ComparisonOptions`]
#[derive(Clone)]
pub struct TextCleaner {
    options: ComparisonOptions,
    /// Case-preserving pipeline
    display: TextPipeline,
    /// Same pipeline followed by lowercasing
    folding: TextPipeline,
}

impl TextCleaner {
    pub fn new(options: ComparisonOptions) -> Self {
        let display = TextPipeline::new()
            .add_normalizer(Box::new(UnicodeCompose))
            .add_normalizer_if(options.ignore_punctuation, Box::new(RemovePunctuation))
            .add_normalizer(Box::new(WhitespaceNormalizer::new().with_trim(true)));
        let folding = display.clone().add_normalizer(Box::new(Lowercase));

        Self {
            options,
            display,
            folding,
        }
    }

    pub fn options(&self) -> ComparisonOptions {
        self.options
    }

    fn pipeline(&self) -> &TextPipeline {
        if self.options.ignore_case {
            &self.folding
        } else {
            &self.display
        }
    }

    /// Clean a sentence, lowercasing it when case is ignored
    pub fn clean(&self, text: &str) -> NormalizedText {
        NormalizedText::new(self.pipeline().run(text))
    }

    /// All intermediate layers of [`TextCleaner::clean`], for inspection
    pub fn layers(&self, text: &str) -> LayerSet {
        self.pipeline().process(text)
    }

    /// Display-case words paired with their folded forms
    ///
    /// Folding happens regardless of `ignore_case`: alignment always runs on
    /// folded words and only rendering honours the option.
    pub fn words(&self, text: &str) -> Vec<Word> {
        WordTokenizer::new().words(&self.display.run(text))
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(ComparisonOptions::default())
    }
}

/// Clean a sentence with the given options
pub fn clean(text: &str, options: ComparisonOptions) -> NormalizedText {
    TextCleaner::new(options).clean(text)
}
