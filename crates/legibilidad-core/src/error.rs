//! Error types for legibilidad-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during readability analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document has no sentences or no content words, so every
    /// formula would divide by zero.
    #[error("document has no sentences or no content words to score")]
    EmptyDocument,

    /// An empty word was passed to the syllable counter.
    #[error("cannot count syllables of an empty word")]
    InvalidInput,

    /// An externally annotated document could not be parsed.
    #[error("invalid annotated document: {0}")]
    InvalidDocument(String),

    /// An unknown formula identifier was provided.
    #[error("unknown formula: {name}. Use: {available}")]
    UnknownFormula {
        /// The formula identifier that was requested.
        name: String,
        /// Comma-separated list of available formula identifiers.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
