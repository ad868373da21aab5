//! Core library for legibilidad.
//!
//! Readability scoring for Spanish prose: a dictionary-free syllable
//! counter plus five classic readability formulas, each with a table of
//! qualitative Spanish labels.
//!
//! # Modules
//!
//! - [`vowels`] - Strong/weak, stressed/unstressed vowel classification
//! - [`syllables`] - Syllable counting and the reference word corpus
//! - [`document`] - Annotated tokens and documents
//! - [`tokenizer`] - The tokenizer contract and the built-in Spanish tokenizer
//! - [`metrics`] - Aggregate document counts
//! - [`formulas`] - The readability formulas and their label scales
//! - [`analyzer`] - The end-to-end analysis pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use legibilidad_core::{TextAnalyzer, count_syllables};
//!
//! assert_eq!(count_syllables("murciélago").unwrap(), 4);
//!
//! let report = TextAnalyzer::new()
//!     .analyze("Cierto hombre soñó con una ciudad. Nunca la encontró.")
//!     .unwrap();
//! for score in &report.scores {
//!     println!("{}: {:.2} ({})", score.id, score.score, score.label);
//! }
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod dictionaries;
pub mod document;
pub mod error;
pub mod formulas;
pub mod metrics;
pub mod syllables;
pub mod tokenizer;
pub mod vowels;

pub use analyzer::{ReadabilityReport, TextAnalyzer};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use document::{AnnotatedDocument, AnnotatedToken};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use formulas::{FormulaId, FormulaScore, ReadabilityFormula};
pub use metrics::DocumentMetrics;
pub use syllables::count_syllables;
pub use tokenizer::{SpanishTokenizer, Tokenizer};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
