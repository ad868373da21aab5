//! Readability formulas.
//!
//! Five independent strategies share one [`DocumentMetrics`] value. Each
//! turns it into a raw score and maps the score onto a qualitative Spanish
//! label through its own [`LabelScale`].
//!
//! | Formula | Module |
//! |---|---|
//! | Flesch reading ease | [`flesch_reading_ease`] |
//! | Flesch-Kincaid grade level | [`flesch_kincaid`] |
//! | Automated readability index | [`automated_readability`] |
//! | Gunning Fog index | [`gunning_fog`] |
//! | Coleman-Liau index | [`coleman_liau`] |

pub mod automated_readability;
pub mod coleman_liau;
pub mod flesch_kincaid;
pub mod flesch_reading_ease;
pub mod gunning_fog;

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use automated_readability::AutomatedReadabilityIndex;
pub use coleman_liau::ColemanLiauIndex;
pub use flesch_kincaid::FleschKincaidGradeLevel;
pub use flesch_reading_ease::FleschReadingEaseScore;
pub use gunning_fog::GunningFogIndex;

use crate::error::{AnalysisError, AnalysisResult};
use crate::metrics::DocumentMetrics;

/// Identifier of a readability formula.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum FormulaId {
    /// Flesch reading ease (higher is easier).
    #[cfg_attr(feature = "clap", value(name = "flesch_reading_ease_score"))]
    FleschReadingEaseScore,
    /// Flesch-Kincaid grade level.
    #[cfg_attr(feature = "clap", value(name = "flesch_kincaid_grade_level"))]
    FleschKincaidGradeLevel,
    /// Automated readability index.
    #[cfg_attr(feature = "clap", value(name = "automated_readability_index"))]
    AutomatedReadabilityIndex,
    /// Gunning Fog index.
    #[cfg_attr(feature = "clap", value(name = "gunning_fog_index"))]
    GunningFogIndex,
    /// Coleman-Liau index.
    #[cfg_attr(feature = "clap", value(name = "coleman_liau_index"))]
    ColemanLiauIndex,
}

impl FormulaId {
    /// Every formula, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::FleschReadingEaseScore,
        Self::FleschKincaidGradeLevel,
        Self::AutomatedReadabilityIndex,
        Self::GunningFogIndex,
        Self::ColemanLiauIndex,
    ];

    /// Returns the formula's stable identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FleschReadingEaseScore => "flesch_reading_ease_score",
            Self::FleschKincaidGradeLevel => "flesch_kincaid_grade_level",
            Self::AutomatedReadabilityIndex => "automated_readability_index",
            Self::GunningFogIndex => "gunning_fog_index",
            Self::ColemanLiauIndex => "coleman_liau_index",
        }
    }
}

impl std::fmt::Display for FormulaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormulaId {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AnalysisError::UnknownFormula {
                name: s.to_string(),
                available: Self::ALL.map(|id| id.as_str()).join(", "),
            })
    }
}

/// Ordered breakpoints mapping a score onto a label.
///
/// Thresholds are checked from highest to lowest and the first one the
/// score reaches wins; anything below the last threshold (and NaN) gets the
/// fallback label. Every real number therefore maps to exactly one label.
#[derive(Debug, Clone, Copy)]
pub struct LabelScale {
    thresholds: &'static [(f64, &'static str)],
    fallback: &'static str,
}

impl LabelScale {
    /// Create a scale from strictly descending `(minimum score, label)` pairs.
    pub const fn new(thresholds: &'static [(f64, &'static str)], fallback: &'static str) -> Self {
        Self {
            thresholds,
            fallback,
        }
    }

    /// Map a score onto its label.
    pub fn label(&self, score: f64) -> &'static str {
        self.thresholds
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(self.fallback, |&(_, label)| label)
    }

    /// The `(minimum score, label)` pairs, highest first.
    pub const fn thresholds(&self) -> &'static [(f64, &'static str)] {
        self.thresholds
    }

    /// Label for scores below every threshold.
    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// Difficulty scale shared by the Gunning Fog and Coleman-Liau indexes.
pub static DIFFICULTY_SCALE: LabelScale = LabelScale::new(
    &[
        (17.0, "muy difícil"),
        (14.0, "difícil"),
        (13.0, "algo difícil"),
        (11.0, "un poco difícil"),
        (8.0, "medio"),
    ],
    "fácil",
);

/// Score and label produced by one formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct FormulaScore {
    /// Which formula produced the score.
    pub id: FormulaId,
    /// Raw, unrounded score.
    pub score: f64,
    /// Qualitative label from the formula's scale.
    pub label: &'static str,
}

/// A readability formula.
pub trait ReadabilityFormula: Send + Sync {
    /// The formula's identifier.
    fn id(&self) -> FormulaId;

    /// The breakpoints used to label scores.
    fn scale(&self) -> &'static LabelScale;

    /// Compute the raw score.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDocument`] if the metrics have no
    /// sentences or no words.
    fn calculate(&self, metrics: &DocumentMetrics) -> AnalysisResult<f64>;

    /// Map a raw score onto a qualitative label. Never fails.
    fn translate(&self, score: f64) -> &'static str {
        self.scale().label(score)
    }

    /// Compute the score and return its label.
    fn calculate_translate(&self, metrics: &DocumentMetrics) -> AnalysisResult<&'static str> {
        Ok(self.translate(self.calculate(metrics)?))
    }

    /// Compute the score and keep both it and its label.
    fn evaluate(&self, metrics: &DocumentMetrics) -> AnalysisResult<FormulaScore> {
        let score = self.calculate(metrics)?;
        Ok(FormulaScore {
            id: self.id(),
            score,
            label: self.translate(score),
        })
    }
}

/// Build the strategy for one formula.
pub fn formula_for(id: FormulaId) -> Box<dyn ReadabilityFormula> {
    match id {
        FormulaId::FleschReadingEaseScore => Box::new(FleschReadingEaseScore),
        FormulaId::FleschKincaidGradeLevel => Box::new(FleschKincaidGradeLevel),
        FormulaId::AutomatedReadabilityIndex => Box::new(AutomatedReadabilityIndex),
        FormulaId::GunningFogIndex => Box::new(GunningFogIndex),
        FormulaId::ColemanLiauIndex => Box::new(ColemanLiauIndex),
    }
}

/// Build every formula, in reporting order.
pub fn all_formulas() -> Vec<Box<dyn ReadabilityFormula>> {
    FormulaId::ALL.into_iter().map(formula_for).collect()
}

/// Probes at, just below, and just above every threshold of a scale.
#[cfg(test)]
pub(crate) fn assert_scale_is_total(scale: &LabelScale) {
    const EPS: f64 = 1e-9;
    let thresholds = scale.thresholds();

    for window in thresholds.windows(2) {
        assert!(window[0].0 > window[1].0, "thresholds must descend");
    }

    for (i, &(min, label)) in thresholds.iter().enumerate() {
        let below = thresholds.get(i + 1).map_or(scale.fallback(), |t| t.1);
        assert_eq!(scale.label(min), label, "at {min}");
        assert_eq!(scale.label(min + EPS), label, "just above {min}");
        assert_eq!(scale.label(min - EPS), below, "just below {min}");
    }

    let top = thresholds.first().map_or(scale.fallback(), |t| t.1);
    assert_eq!(scale.label(f64::INFINITY), top);
    assert_eq!(scale.label(f64::NEG_INFINITY), scale.fallback());
    assert_eq!(scale.label(f64::NAN), scale.fallback());
}
