//! Flesch-Kincaid grade level.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Approximates the school grade needed to follow the text.

use super::{FormulaId, LabelScale, ReadabilityFormula};
use crate::error::AnalysisResult;
use crate::metrics::DocumentMetrics;

static SCALE: LabelScale = LabelScale::new(&[(12.0, "avanzado"), (6.0, "medio")], "básico");

/// Flesch-Kincaid grade level.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschKincaidGradeLevel;

impl ReadabilityFormula for FleschKincaidGradeLevel {
    fn id(&self) -> FormulaId {
        FormulaId::FleschKincaidGradeLevel
    }

    fn scale(&self) -> &'static LabelScale {
        &SCALE
    }

    #[allow(clippy::suboptimal_flops)]
    fn calculate(&self, metrics: &DocumentMetrics) -> AnalysisResult<f64> {
        metrics.ensure_scorable()?;
        let words_per_sentence = metrics.words_per_sentence()?;
        let syllables_per_word = metrics.syllables_per_word()?;
        Ok(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
    }
}
