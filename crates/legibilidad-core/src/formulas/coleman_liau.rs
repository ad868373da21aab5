//! Coleman-Liau index.
//!
//! Formula: `0.0588 * L - 0.296 * S - 15.8`, where `L` is letters per 100
//! words and `S` is sentences per 100 words.

use super::{DIFFICULTY_SCALE, FormulaId, LabelScale, ReadabilityFormula};
use crate::error::AnalysisResult;
use crate::metrics::DocumentMetrics;

const HUNDRED_WORDS: f64 = 100.0;

/// Coleman-Liau index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColemanLiauIndex;

impl ReadabilityFormula for ColemanLiauIndex {
    fn id(&self) -> FormulaId {
        FormulaId::ColemanLiauIndex
    }

    fn scale(&self) -> &'static LabelScale {
        &DIFFICULTY_SCALE
    }

    // Unfused, left to right: scores that sit on a breakpoint stay on it.
    #[allow(clippy::suboptimal_flops)]
    fn calculate(&self, metrics: &DocumentMetrics) -> AnalysisResult<f64> {
        metrics.ensure_scorable()?;
        let letters = metrics.letters_per_word()? * HUNDRED_WORDS;
        let sentences = metrics.sentences_per_word()? * HUNDRED_WORDS;
        Ok(0.0588 * letters - 0.296 * sentences - 15.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_from_counts() {
        // 500 letters and 10 sentences per 100 words.
        let metrics = DocumentMetrics::new(2, 20, 100, 40, 0);
        let score = ColemanLiauIndex.calculate(&metrics).unwrap();
        // 0.0588 * 500 - 0.296 * 10 - 15.8
        assert!((score - 10.64).abs() < 1e-9, "score = {score}");
        assert_eq!(ColemanLiauIndex.translate(score), "medio");
    }

    #[test]
    fn score_on_breakpoint_keeps_its_label() {
        // (0.0588 * 28000 - 0.296 * 600) / 51 - 15.8 is exactly 13.
        let metrics = DocumentMetrics::new(6, 51, 280, 90, 0);
        let score = ColemanLiauIndex.calculate(&metrics).unwrap();
        assert_eq!(score, 13.0);
        assert_eq!(ColemanLiauIndex.translate(score), "algo difícil");
    }

    #[test]
    fn shares_scale_with_gunning_fog() {
        use crate::formulas::GunningFogIndex;
        for score in [-1.0, 8.0, 11.0, 13.0, 14.0, 17.0, 40.0] {
            assert_eq!(
                ColemanLiauIndex.translate(score),
                GunningFogIndex.translate(score)
            );
        }
    }
}
