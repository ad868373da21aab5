//! Annotated documents produced by a tokenizer.
//!
//! A document is an ordered list of sentences, each an ordered list of
//! tokens flagged as punctuation, whitespace, or stop word. Tokens that are
//! neither punctuation nor whitespace are *content words*.
//!
//! Documents deserialize from JSON, so any linguistic engine can feed the
//! analyzer:
//!
//! ```json
//! { "sentences": [[
//!     { "text": "Hola" },
//!     { "text": ",", "is_punctuation": true },
//!     { "text": "mundo" }
//! ]] }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// A single token with its linguistic flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnnotatedToken {
    /// The token's surface text.
    pub text: String,
    /// Whether the token is punctuation.
    #[serde(default)]
    pub is_punctuation: bool,
    /// Whether the token is whitespace.
    #[serde(default)]
    pub is_whitespace: bool,
    /// Whether the token is a stop word.
    #[serde(default)]
    pub is_stopword: bool,
}

impl AnnotatedToken {
    /// A word token.
    pub fn word(text: impl Into<String>, is_stopword: bool) -> Self {
        Self {
            text: text.into(),
            is_punctuation: false,
            is_whitespace: false,
            is_stopword,
        }
    }

    /// A punctuation token.
    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_punctuation: true,
            is_whitespace: false,
            is_stopword: false,
        }
    }

    /// A whitespace token.
    pub fn whitespace(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_punctuation: false,
            is_whitespace: true,
            is_stopword: false,
        }
    }

    /// Whether this token is a content word (neither punctuation nor whitespace).
    pub const fn is_content_word(&self) -> bool {
        !self.is_punctuation && !self.is_whitespace
    }
}

/// One sentence: an ordered run of tokens.
pub type Sentence = Vec<AnnotatedToken>;

/// A tokenized, annotated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnnotatedDocument {
    /// Sentences in reading order.
    pub sentences: Vec<Sentence>,
}

impl AnnotatedDocument {
    /// Build a document from its sentences.
    pub const fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Parse a document from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidDocument`] if the JSON does not match
    /// the document shape.
    pub fn from_json(json: &str) -> AnalysisResult<Self> {
        serde_json::from_str(json).map_err(|e| AnalysisError::InvalidDocument(e.to_string()))
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// All tokens in reading order.
    pub fn tokens(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.sentences.iter().flatten()
    }

    /// All content words in reading order.
    pub fn content_words(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.tokens().filter(|t| t.is_content_word())
    }

    /// Whether the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnnotatedDocument {
        AnnotatedDocument::new(vec![
            vec![
                AnnotatedToken::word("El", true),
                AnnotatedToken::word("halcón", false),
                AnnotatedToken::word("voló", false),
                AnnotatedToken::punctuation("."),
            ],
            vec![
                AnnotatedToken::whitespace("\n"),
                AnnotatedToken::word("Fin", false),
                AnnotatedToken::punctuation("."),
            ],
        ])
    }

    #[test]
    fn content_words_skip_punctuation_and_whitespace() {
        let doc = sample();
        let words: Vec<&str> = doc.content_words().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["El", "halcón", "voló", "Fin"]);
        assert_eq!(doc.tokens().count(), 7);
        assert_eq!(doc.sentence_count(), 2);
    }

    #[test]
    fn json_flags_default_to_false() {
        let doc = AnnotatedDocument::from_json(
            r#"{"sentences": [[{"text": "Hola"}, {"text": "!", "is_punctuation": true}]]}"#,
        )
        .unwrap();
        assert_eq!(doc.sentences[0][0], AnnotatedToken::word("Hola", false));
        assert!(doc.sentences[0][1].is_punctuation);
        assert!(!doc.sentences[0][1].is_whitespace);
    }

    #[test]
    fn json_round_trip_preserves_document() {
        let doc = sample();
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(AnnotatedDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn malformed_json_is_invalid_document() {
        let result = AnnotatedDocument::from_json(r#"{"sentences": "nope"}"#);
        assert!(matches!(result, Err(AnalysisError::InvalidDocument(_))));
    }

    #[test]
    fn empty_document() {
        let doc = AnnotatedDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.content_words().count(), 0);
    }
}
