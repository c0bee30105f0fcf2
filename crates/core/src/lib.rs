//! # Diktat
//!
//! Comparison engine for German dictation practice. A learner's typed
//! sentence is compared word by word against a reference and the result is
//! expanded into character tokens that show exactly what went wrong.
//!
//! ## Core Concepts
//!
//! - **Digraphs**: `ae`/`oe`/`ue` and `B` typed on non-German keyboards are
//!   repaired to `ä`/`ö`/`ü`/`ß` on the user side only
//! - **Pipelines**: Chain normalizers to clean sentences layer by layer
//! - **Aligner**: Weighted edit-distance alignment of the two word lists
//! - **Expander**: Turns the alignment into renderable [`DiffToken`]s
//! - **Scoring**: Word counts per sentence and totals per session
//!
//! ## Example
//!
//! ```rust
//! use diktat_core::{compare, ComparisonOptions, TokenStatus};
//!
//! let result = compare("Ich führe.", "ich fuehre", ComparisonOptions::default());
//! assert_eq!(result.stats.correct_words, 2);
//! assert!(result.diff.iter().all(|t| t.status != TokenStatus::Wrong));
//! ```

pub mod algorithm;
pub mod cleaner;
pub mod config;
pub mod diff;
pub mod digraph;
pub mod engine;
pub mod errors;
pub mod expander;
pub mod live;
pub mod normalizers;
pub mod pipeline;
pub mod score;
pub mod tokenizers;

// Re-export main types
pub use algorithm::{align, SequenceAligner, WeightedAligner};
pub use cleaner::{NormalizedText, TextCleaner};
pub use config::{load_config, AlignmentCosts, ComparisonOptions, EngineConfig};
pub use diff::{Alignment, AlignmentOp, DiffToken, EditType, TokenStatus};
pub use digraph::{normalize_digraphs, DigraphNormalizer};
pub use engine::{Comparison, ComparisonEngine};
pub use errors::{ConfigError, Result};
pub use live::compare_live;
pub use pipeline::{LayerSet, TextPipeline};
pub use score::{score, CharStats, SessionStats, WordStats};
pub use tokenizers::Word;

/// Repair ASCII digraphs in raw user keystrokes
///
/// Only ever applied to the user side; reference text is assumed correct.
pub fn normalize_user_text(raw: &str) -> String {
    normalize_digraphs(raw)
}

/// Main entry point for comparing a dictated sentence with its reference
///
/// # Arguments
///
/// * `reference` - The correct sentence
/// * `user_input` - What the learner typed; digraphs are resolved internally
/// * `options` - Case and punctuation handling
///
/// # Example
///
/// ```rust
/// use diktat_core::{compare, ComparisonOptions};
///
/// let result = compare("guten Tag", "guten schönen Tag", ComparisonOptions::default());
/// assert_eq!(result.stats.correct_words, 2);
/// assert_eq!(result.stats.wrong_words, 0);
/// ```
pub fn compare(reference: &str, user_input: &str, options: ComparisonOptions) -> Comparison {
    ComparisonEngine::with_options(options).compare(reference, user_input)
}
