//! Word alignment algorithms
//!
//! Provides the `SequenceAligner` trait and the weighted edit-distance aligner.
pub mod weighted;

pub use weighted::{CostMatrix, WeightedAligner};

use crate::diff::Alignment;
use crate::tokenizers::Word;

/// Key a value is compared by during alignment
pub trait AlignKey {
    fn align_key(&self) -> &str;
}

impl AlignKey for String {
    fn align_key(&self) -> &str {
        self
    }
}

impl AlignKey for &str {
    fn align_key(&self) -> &str {
        self
    }
}

/// Words align on their folded form
impl AlignKey for Word {
    fn align_key(&self) -> &str {
        &self.folded
    }
}

/// Trait for word aligners
pub trait SequenceAligner {
    /// Compute an alignment mapping `reference` onto `user`
    fn align<W: AlignKey + Clone>(&self, reference: &[W], user: &[W]) -> Alignment<W>;
}

/// Align two word lists with the default costs
pub fn align<W: AlignKey + Clone>(reference: &[W], user: &[W]) -> Alignment<W> {
    WeightedAligner::default().align(reference, user)
}
