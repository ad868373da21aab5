//! Automated readability index.
//!
//! Formula: `4.71 * (letters/words) + 0.5 * (words/sentences) - 21.43`
//!
//! Counts letters instead of syllables, so it does not depend on the
//! syllable counter at all.

use super::{FormulaId, LabelScale, ReadabilityFormula};
use crate::error::AnalysisResult;
use crate::metrics::DocumentMetrics;

static SCALE: LabelScale = LabelScale::new(
    &[
        (13.0, "muy difícil"),
        (12.0, "difícil"),
        (11.0, "bastante difícil"),
        (10.0, "algo difícil"),
        (9.0, "un poco difícil"),
        (7.0, "medio"),
        (5.0, "fácil-medio"),
        (4.0, "fácil"),
        (2.0, "muy fácil"),
    ],
    "extremadamente fácil",
);

/// Automated readability index.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomatedReadabilityIndex;

impl ReadabilityFormula for AutomatedReadabilityIndex {
    fn id(&self) -> FormulaId {
        FormulaId::AutomatedReadabilityIndex
    }

    fn scale(&self) -> &'static LabelScale {
        &SCALE
    }

    #[allow(clippy::suboptimal_flops)]
    fn calculate(&self, metrics: &DocumentMetrics) -> AnalysisResult<f64> {
        metrics.ensure_scorable()?;
        let letters_per_word = metrics.letters_per_word()?;
        let words_per_sentence = metrics.words_per_sentence()?;
        Ok(4.71 * letters_per_word + 0.5 * words_per_sentence - 21.43)
    }
}
