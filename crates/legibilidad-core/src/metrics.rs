//! Aggregate counts over an annotated document.
//!
//! All five readability formulas are ratios of the same handful of counts,
//! so they are computed once per document and shared by reference.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document::AnnotatedDocument;
use crate::error::{AnalysisError, AnalysisResult};
use crate::syllables::count_syllables;

/// Counts derived from one annotated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct DocumentMetrics {
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of content words (neither punctuation nor whitespace).
    pub word_count: usize,
    /// Characters across all content words.
    pub letter_count: usize,
    /// Estimated syllables across all content words.
    pub syllable_count: usize,
    /// Content words that are not stop words and have more than two syllables.
    pub complex_word_count: usize,
}

impl DocumentMetrics {
    /// Build metrics from raw counts.
    pub const fn new(
        sentence_count: usize,
        word_count: usize,
        letter_count: usize,
        syllable_count: usize,
        complex_word_count: usize,
    ) -> Self {
        Self {
            sentence_count,
            word_count,
            letter_count,
            syllable_count,
            complex_word_count,
        }
    }

    /// Compute metrics for a document.
    ///
    /// An empty document yields all-zero metrics; the formulas reject it.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] if the document contains an
    /// empty content word.
    #[tracing::instrument(skip_all, fields(sentences = document.sentence_count()))]
    pub fn from_document(document: &AnnotatedDocument) -> AnalysisResult<Self> {
        let mut metrics = Self {
            sentence_count: document.sentence_count(),
            ..Self::default()
        };

        for token in document.content_words() {
            let syllables = count_syllables(&token.text)?;
            metrics.word_count += 1;
            metrics.letter_count += token.text.chars().count();
            metrics.syllable_count += syllables;
            if !token.is_stopword && syllables > 2 {
                metrics.complex_word_count += 1;
            }
        }

        tracing::debug!(
            words = metrics.word_count,
            letters = metrics.letter_count,
            syllables = metrics.syllable_count,
            complex_words = metrics.complex_word_count,
            "computed document metrics"
        );
        Ok(metrics)
    }

    /// Check that every ratio has a non-zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDocument`] if there are no sentences or
    /// no content words.
    pub fn ensure_scorable(&self) -> AnalysisResult<()> {
        if self.sentence_count == 0 || self.word_count == 0 {
            return Err(AnalysisError::EmptyDocument);
        }
        Ok(())
    }

    /// Average words per sentence.
    pub fn words_per_sentence(&self) -> AnalysisResult<f64> {
        ratio(self.word_count, self.sentence_count)
    }

    /// Average syllables per word.
    pub fn syllables_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.syllable_count, self.word_count)
    }

    /// Average letters per word.
    pub fn letters_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.letter_count, self.word_count)
    }

    /// Fraction of words that are complex.
    pub fn complex_words_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.complex_word_count, self.word_count)
    }

    /// Sentences per word.
    pub fn sentences_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.sentence_count, self.word_count)
    }
}

fn ratio(numerator: usize, denominator: usize) -> AnalysisResult<f64> {
    if denominator == 0 {
        return Err(AnalysisError::EmptyDocument);
    }
    Ok(numerator as f64 / denominator as f64)
}
