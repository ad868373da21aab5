//! Dictionaries for text annotation.
//!
//! Provides the curated Spanish word sets used by the tokenizer for
//! stop-word flagging and sentence splitting.

pub mod abbreviations;
pub mod stopwords;
