//! Readability analysis pipeline.
//!
//! [`TextAnalyzer`] wires a [`Tokenizer`] to the formula set: annotate the
//! text, compute [`DocumentMetrics`] once, then evaluate every configured
//! formula against them.
//!
//! ```
//! use legibilidad_core::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! let report = analyzer
//!     .analyze("El halcón voló sobre el río. Después volvió al nido.")
//!     .unwrap();
//! assert_eq!(report.labels().len(), 5);
//! ```

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use crate::document::AnnotatedDocument;
use crate::error::AnalysisResult;
use crate::formulas::{FormulaId, FormulaScore, ReadabilityFormula, all_formulas, formula_for};
use crate::metrics::DocumentMetrics;
use crate::tokenizer::{SpanishTokenizer, Tokenizer};

/// Result of analyzing one text.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Aggregate counts the scores were computed from.
    pub metrics: DocumentMetrics,
    /// One entry per configured formula, in reporting order.
    pub scores: Vec<FormulaScore>,
}

impl ReadabilityReport {
    /// Formula identifier to qualitative label.
    pub fn labels(&self) -> BTreeMap<&'static str, &'static str> {
        self.scores
            .iter()
            .map(|s| (s.id.as_str(), s.label))
            .collect()
    }

    /// The score produced by one formula, if it ran.
    pub fn score(&self, id: FormulaId) -> Option<&FormulaScore> {
        self.scores.iter().find(|s| s.id == id)
    }
}

/// Scores text with a set of readability formulas.
///
/// Holds no mutable state, so one analyzer can be shared across threads.
pub struct TextAnalyzer<T: Tokenizer = SpanishTokenizer> {
    tokenizer: T,
    formulas: Vec<Box<dyn ReadabilityFormula>>,
}

impl TextAnalyzer<SpanishTokenizer> {
    /// Analyzer with the built-in Spanish tokenizer and all five formulas.
    pub fn new() -> Self {
        Self::with_tokenizer(SpanishTokenizer::new())
    }
}

impl Default for TextAnalyzer<SpanishTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> TextAnalyzer<T> {
    /// Analyzer with a custom tokenizer and all five formulas.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            formulas: all_formulas(),
        }
    }

    /// Restrict the analyzer to these formulas, in the given order.
    ///
    /// Duplicates are ignored.
    #[must_use]
    pub fn with_formulas(mut self, ids: &[FormulaId]) -> Self {
        let mut selected: Vec<FormulaId> = Vec::with_capacity(ids.len());
        for &id in ids {
            if !selected.contains(&id) {
                selected.push(id);
            }
        }
        self.formulas = selected.into_iter().map(formula_for).collect();
        self
    }

    /// Identifiers of the formulas this analyzer runs.
    pub fn formula_ids(&self) -> Vec<FormulaId> {
        self.formulas.iter().map(|f| f.id()).collect()
    }

    /// Annotate and score raw text.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDocument`](crate::AnalysisError::EmptyDocument)
    /// if the text has no sentences or no content words, or any error raised
    /// by the tokenizer.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> AnalysisResult<ReadabilityReport> {
        let document = self.tokenizer.annotate(text)?;
        self.analyze_document(&document)
    }

    /// Score a document that was annotated elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDocument`](crate::AnalysisError::EmptyDocument)
    /// for a document with no sentences or no content words, and
    /// [`AnalysisError::InvalidInput`](crate::AnalysisError::InvalidInput) if
    /// it contains an empty content word.
    #[tracing::instrument(skip_all, fields(sentences = document.sentence_count()))]
    pub fn analyze_document(
        &self,
        document: &AnnotatedDocument,
    ) -> AnalysisResult<ReadabilityReport> {
        let metrics = DocumentMetrics::from_document(document)?;
        metrics.ensure_scorable()?;

        let scores = self
            .formulas
            .iter()
            .map(|formula| formula.evaluate(&metrics))
            .collect::<AnalysisResult<Vec<_>>>()?;

        for s in &scores {
            tracing::debug!(formula = %s.id, score = s.score, label = s.label, "scored");
        }

        Ok(ReadabilityReport { metrics, scores })
    }
}
