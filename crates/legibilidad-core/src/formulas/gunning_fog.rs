//! Gunning Fog index.
//!
//! Formula: `0.4 * ((words/sentences) + 100 * (complex words/words))`
//!
//! A complex word is a content word with more than two syllables that is
//! not a stop word.

use super::{DIFFICULTY_SCALE, FormulaId, LabelScale, ReadabilityFormula};
use crate::error::AnalysisResult;
use crate::metrics::DocumentMetrics;

/// Gunning Fog index.
#[derive(Debug, Clone, Copy, Default)]
pub struct GunningFogIndex;

impl ReadabilityFormula for GunningFogIndex {
    fn id(&self) -> FormulaId {
        FormulaId::GunningFogIndex
    }

    fn scale(&self) -> &'static LabelScale {
        &DIFFICULTY_SCALE
    }

    #[allow(clippy::suboptimal_flops)]
    fn calculate(&self, metrics: &DocumentMetrics) -> AnalysisResult<f64> {
        metrics.ensure_scorable()?;
        let words_per_sentence = metrics.words_per_sentence()?;
        let complex_per_word = metrics.complex_words_per_word()?;
        Ok(0.4 * (words_per_sentence + 100.0 * complex_per_word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_from_counts() {
        // 10 words per sentence, 20% complex words.
        let metrics = DocumentMetrics::new(2, 20, 100, 40, 4);
        let score = GunningFogIndex.calculate(&metrics).unwrap();
        // 0.4 * (10 + 20)
        assert!((score - 12.0).abs() < 1e-9, "score = {score}");
        assert_eq!(GunningFogIndex.translate(score), "un poco difícil");
    }

    #[test]
    fn no_complex_words() {
        let metrics = DocumentMetrics::new(1, 5, 20, 8, 0);
        let score = GunningFogIndex.calculate(&metrics).unwrap();
        assert!((score - 2.0).abs() < 1e-9);
        assert_eq!(GunningFogIndex.translate(score), "fácil");
    }

    #[test]
    fn breakpoint_score_is_exact() {
        // 0.4 * (2.5 + 40)
        let metrics = DocumentMetrics::new(2, 5, 20, 10, 2);
        let score = GunningFogIndex.calculate(&metrics).unwrap();
        assert_eq!(score, 17.0);
        assert_eq!(GunningFogIndex.translate(score), "muy difícil");
    }

    #[test]
    fn labels() {
        assert_eq!(GunningFogIndex.translate(18.0), "muy difícil");
        assert_eq!(GunningFogIndex.translate(13.5), "algo difícil");
        assert_eq!(GunningFogIndex.translate(8.0), "medio");
    }
}
