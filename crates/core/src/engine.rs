//! Comparison engine that orchestrates cleaning, alignment, expansion and scoring

use serde::Serialize;

use crate::algorithm::{SequenceAligner, WeightedAligner};
use crate::cleaner::TextCleaner;
use crate::config::{ComparisonOptions, EngineConfig};
use crate::diff::{render_text, Alignment, DiffToken};
use crate::digraph::normalize_digraphs;
use crate::expander::DiffExpander;
use crate::live;
use crate::score::{score, CharStats, WordStats};
use crate::tokenizers::Word;

/// Result of comparing one dictated sentence with its reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Character-level tokens ready for rendering
    pub diff: Vec<DiffToken>,

    pub stats: WordStats,

    pub char_stats: CharStats,

    /// Word alignment the diff was expanded from
    pub alignment: Alignment<Word>,
}

impl Comparison {
    /// The diff as plain text
    pub fn text(&self) -> String {
        render_text(&self.diff)
    }

    /// True when the learner made no error at all
    pub fn is_perfect(&self) -> bool {
        !self.diff.iter().any(|t| t.status.is_error())
    }
}

/// The comparison engine
///
/// Holds no per-call state; one engine can serve any number of comparisons,
/// including from several threads at once.
#[derive(Clone)]
pub struct ComparisonEngine {
    config: EngineConfig,
    cleaner: TextCleaner,
    aligner: WeightedAligner,
    expander: DiffExpander,
}

impl ComparisonEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            cleaner: TextCleaner::new(config.options),
            aligner: WeightedAligner::new(config.costs),
            expander: DiffExpander::new(config.options),
            config,
        }
    }

    /// Create an engine with default costs and the given options
    pub fn with_options(options: ComparisonOptions) -> Self {
        Self::new(EngineConfig::default().with_options(options))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare raw user input against a reference sentence
    ///
    /// Digraphs in `user_input` are resolved first; the reference is taken
    /// as written. Steps:
    /// 1. Clean both sides into display/folded word pairs
    /// 2. Align the words on their folded form
    /// 3. Expand the alignment into character tokens
    /// 4. Score the alignment
    #[tracing::instrument(
        skip_all,
        fields(
            reference_len = reference.len(),
            input_len = user_input.len(),
            ignore_case = self.config.options.ignore_case,
        )
    )]
    pub fn compare(&self, reference: &str, user_input: &str) -> Comparison {
        let reference_words = self.cleaner.words(reference);
        let user_words = self.cleaner.words(&normalize_digraphs(user_input));

        let alignment = self.aligner.align(&reference_words, &user_words);
        let diff = self.expander.expand(&alignment);
        let stats = score(&alignment);
        let char_stats = CharStats::from_diff(&diff, &alignment);

        tracing::debug!(
            reference_words = reference_words.len(),
            user_words = user_words.len(),
            cost = alignment.cost,
            correct = stats.correct_words,
            wrong = stats.wrong_words,
            "comparison finished"
        );

        Comparison {
            diff,
            stats,
            char_stats,
            alignment,
        }
    }

    /// Character-by-character feedback for text still being typed
    pub fn compare_live(&self, reference: &str, user_input: &str) -> Vec<DiffToken> {
        live::compare_live(reference, user_input, self.config.options)
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
