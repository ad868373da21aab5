//! Flesch reading ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier. Most everyday prose scores between 30 and 90.

use super::{FormulaId, LabelScale, ReadabilityFormula};
use crate::error::AnalysisResult;
use crate::metrics::DocumentMetrics;

static SCALE: LabelScale = LabelScale::new(
    &[
        (90.0, "muy fácil"),
        (80.0, "fácil"),
        (70.0, "bastante fácil"),
        (60.0, "estándar"),
        (50.0, "bastante difícil"),
        (30.0, "difícil"),
    ],
    "muy confusa",
);

/// Flesch reading ease score.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschReadingEaseScore;

impl ReadabilityFormula for FleschReadingEaseScore {
    fn id(&self) -> FormulaId {
        FormulaId::FleschReadingEaseScore
    }

    fn scale(&self) -> &'static LabelScale {
        &SCALE
    }

    #[allow(clippy::suboptimal_flops)]
    fn calculate(&self, metrics: &DocumentMetrics) -> AnalysisResult<f64> {
        metrics.ensure_scorable()?;
        let words_per_sentence = metrics.words_per_sentence()?;
        let syllables_per_word = metrics.syllables_per_word()?;
        Ok(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::assert_scale_is_total;

    #[test]
    fn ten_words_two_sentences_twenty_syllables() {
        let metrics = DocumentMetrics::new(2, 10, 40, 20, 0);
        let score = FleschReadingEaseScore.calculate(&metrics).unwrap();
        // 206.835 - 1.015 * 5 - 84.6 * 2
        assert!((score - 32.56).abs() < 1e-9, "score = {score}");
        assert_eq!(FleschReadingEaseScore.translate(score), "difícil");
    }

    #[test]
    fn short_simple_text_is_easy() {
        // Two words per sentence, 1.4 syllables per word.
        let metrics = DocumentMetrics::new(5, 10, 40, 14, 0);
        let label = FleschReadingEaseScore.calculate_translate(&metrics).unwrap();
        // 206.835 - 2.03 - 118.44 = 86.365
        assert_eq!(label, "fácil");
    }

    #[test]
    fn labels() {
        assert_eq!(FleschReadingEaseScore.translate(95.0), "muy fácil");
        assert_eq!(FleschReadingEaseScore.translate(65.0), "estándar");
        assert_eq!(FleschReadingEaseScore.translate(-20.0), "muy confusa");
    }

    #[test]
    fn scale_is_total() {
        assert_scale_is_total(&SCALE);
    }
}
