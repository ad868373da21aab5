//! Dictionary-free syllable counting for Spanish words.
//!
//! Every Spanish syllable has at least one vowel, so the vowel count is a
//! good first estimate. Vowels that share a syllable are then folded
//! back: each triphthong removes two, each diphthong removes one.
//!
//! Both patterns are scanned left to right without overlap, and diphthongs
//! are only looked for in words without a triphthong.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::vowels::{self, STRONG_STRESSED, STRONG_UNSTRESSED, WEAK_STRESSED, WEAK_UNSTRESSED};

/// Weak unstressed + strong + weak unstressed (`uái`, `iei`, ...).
static TRIPHTHONG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let weak = WEAK_UNSTRESSED;
    let strong = format!("{STRONG_UNSTRESSED}{STRONG_STRESSED}");
    Regex::new(&format!("[{weak}][{strong}][{weak}]")).expect("valid regex")
});

/// Strong + weak unstressed, weak unstressed + strong, or weak unstressed
/// + any weak. Alternatives are tried in that order at each position.
static DIPHTHONG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let weak_unstressed = WEAK_UNSTRESSED;
    let weak = format!("{WEAK_UNSTRESSED}{WEAK_STRESSED}");
    let strong = format!("{STRONG_UNSTRESSED}{STRONG_STRESSED}");
    Regex::new(&format!(
        "[{strong}][{weak_unstressed}]|[{weak_unstressed}][{strong}]|[{weak_unstressed}][{weak}]"
    ))
    .expect("valid regex")
});

/// Labelled words used to measure the counter's accuracy.
///
/// Vocabulary of a short Spanish fable, with the syllable count a
/// dictionary would give.
pub const REFERENCE_WORDS: &[(&str, usize)] = &[
    ("cierto", 2),
    ("hombre", 2),
    ("había", 3),
    ("comprado", 3),
    ("una", 2),
    ("vaca", 2),
    ("magnífica", 4),
    ("soñó", 2),
    ("misma", 2),
    ("noche", 2),
    ("crecían", 3),
    ("sobre", 2),
    ("espaldas", 3),
    ("animal", 3),
    ("marchaba", 3),
    ("volando", 3),
    ("considerando", 5),
    ("esto", 2),
    ("presagio", 3),
    ("infortunio", 4),
    ("inminente", 4),
    ("llevó", 2),
    ("mercado", 3),
    ("nuevamente", 4),
    ("vendió", 2),
    ("gran", 1),
    ("pérdida", 3),
    ("envolviendo", 4),
    ("pano", 2),
    ("plata", 2),
    ("recibió", 3),
    ("echó", 2),
    ("mitad", 2),
    ("camino", 3),
    ("casa", 2),
    ("halcón", 2),
    ("comiendo", 3),
    ("parte", 2),
    ("libre", 2),
    ("acercándose", 5),
    ("ave", 2),
    ("descubrió", 3),
    ("bastante", 3),
    ("mansa", 2),
    ("manera", 3),
    ("ató", 2),
    ("pata", 2),
    ("esquina", 3),
    ("pano", 2),
    ("dinero", 3),
    ("aleteaba", 5),
    ("mucho", 2),
    ("tratando", 3),
    ("escapar", 3),
    ("rato", 2),
    ("aflojarse", 4),
    ("momentáneamente", 7),
    ("voló", 2),
    ("trapo", 2),
    ("destino", 3),
    ("dijo", 2),
    ("hombre", 2),
    ("cuando", 2),
    ("historia", 3),
    ("ignorante", 4),
    ("tenerse", 3),
    ("fe", 1),
    ("sueños", 2),
    ("segundo", 3),
    ("gente", 2),
    ("debe", 2),
    ("recoger", 3),
    ("cosas", 2),
    ("lado", 2),
    ("camino", 3),
    ("cuadrúpedos", 4),
];

/// Lower-case a word and turn a trailing `y` into `i`.
///
/// A word-final `y` is pronounced as the weak vowel `i` (`hoy`, `buey`).
fn normalize(word: &str) -> String {
    let mut lowered = word.to_lowercase();
    if lowered.ends_with('y') {
        lowered.pop();
        lowered.push('i');
    }
    lowered
}

/// Count vowel characters in an already lower-cased word.
pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|&c| vowels::is_vowel(c)).count()
}

/// Count non-overlapping triphthongs in an already lower-cased word.
pub fn count_triphthongs(word: &str) -> usize {
    TRIPHTHONG_PATTERN.find_iter(word).count()
}

/// Count non-overlapping diphthongs in an already lower-cased word.
pub fn count_diphthongs(word: &str) -> usize {
    DIPHTHONG_PATTERN.find_iter(word).count()
}

/// Estimate the number of syllables in a Spanish word.
///
/// Always returns at least 1 for a non-empty word, even one without any
/// vowel (`gr`, `2024`).
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] if `word` is empty.
pub fn count_syllables(word: &str) -> AnalysisResult<usize> {
    if word.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    let word = normalize(word);
    let vowel_count = count_vowels(&word);
    if vowel_count == 0 {
        return Ok(1);
    }

    let triphthongs = count_triphthongs(&word);
    let mut syllables = vowel_count - 2 * triphthongs;

    // A word never has both.
    if triphthongs == 0 {
        syllables -= count_diphthongs(&word);
    }

    Ok(syllables)
}

/// A word whose estimated count differs from its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Mismatch {
    /// The labelled word.
    pub word: String,
    /// Expected syllable count.
    pub expected: usize,
    /// Count produced by [`count_syllables`].
    pub counted: usize,
}

/// Result of checking the counter against labelled words.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccuracyReport {
    /// Number of labelled words checked.
    pub total: usize,
    /// Number of words counted correctly.
    pub matches: usize,
    /// `matches / total`, or 0 for an empty corpus.
    pub accuracy: f64,
    /// Words that were counted incorrectly, in corpus order.
    pub mismatches: Vec<Mismatch>,
}

/// Measure how many labelled words the counter gets right.
///
/// Empty words in `cases` count as mismatches with a count of 0.
#[tracing::instrument(skip_all, fields(cases = cases.len()))]
pub fn measure_accuracy(cases: &[(&str, usize)]) -> AccuracyReport {
    let mismatches: Vec<Mismatch> = cases
        .iter()
        .filter_map(|&(word, expected)| {
            let counted = count_syllables(word).unwrap_or(0);
            (counted != expected).then(|| Mismatch {
                word: word.to_string(),
                expected,
                counted,
            })
        })
        .collect();

    let total = cases.len();
    let matches = total - mismatches.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    };
    tracing::debug!(total, matches, accuracy, "measured syllable accuracy");

    AccuracyReport {
        total,
        matches,
        accuracy,
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(word: &str) -> usize {
        count_syllables(word).unwrap()
    }

    #[test]
    fn reference_samples() {
        assert_eq!(count("cierto"), 2);
        assert_eq!(count("hombre"), 2);
        assert_eq!(count("había"), 3);
        assert_eq!(count("magnífica"), 4);
        assert_eq!(count("soñó"), 2);
        assert_eq!(count("considerando"), 5);
        assert_eq!(count("acercándose"), 5);
        assert_eq!(count("aleteaba"), 5);
        assert_eq!(count("momentáneamente"), 7);
        assert_eq!(count("fe"), 1);
        assert_eq!(count("gran"), 1);
    }

    #[test]
    fn whole_reference_corpus_matches() {
        let report = measure_accuracy(REFERENCE_WORDS);
        assert_eq!(report.total, 76);
        assert!(report.mismatches.is_empty(), "{:?}", report.mismatches);
        assert!((report.accuracy - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_reports_mismatches() {
        let report = measure_accuracy(&[("casa", 2), ("casa", 3), ("", 1)]);
        assert_eq!(report.total, 3);
        assert_eq!(report.matches, 1);
        assert_eq!(report.mismatches.len(), 2);
        assert_eq!(report.mismatches[0].counted, 2);
        assert_eq!(report.mismatches[1].counted, 0);
    }

    #[test]
    fn empty_corpus_has_zero_accuracy() {
        let report = measure_accuracy(&[]);
        assert_eq!(report.total, 0);
        assert!(report.accuracy.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_word_is_invalid_input() {
        assert_eq!(count_syllables(""), Err(AnalysisError::InvalidInput));
    }

    #[test]
    fn vowelless_words_count_as_one() {
        assert_eq!(count("xyz"), 1);
        assert_eq!(count("2024"), 1);
        assert_eq!(count("y"), 1);
    }

    #[test]
    fn uppercase_is_lowered_first() {
        assert_eq!(count("CIERTO"), 2);
        assert_eq!(count("Acercándose"), 5);
    }

    #[test]
    fn final_y_acts_as_weak_vowel() {
        assert_eq!(count("hoy"), 1);
        assert_eq!(count("muy"), 1);
        assert_eq!(count("rey"), 1);
        assert_eq!(count("Uruguay"), 3);
    }

    #[test]
    fn triphthong_suppresses_diphthong_scan() {
        // "buei": diphthong-only scanning would give 2, both corrections 0.
        assert_eq!(count_triphthongs("buei"), 1);
        assert_eq!(count_diphthongs("buei"), 1);
        assert_eq!(count("buey"), 1);

        assert_eq!(count("estudiáis"), 3);
        assert_eq!(count("averiguáis"), 4);
        assert_eq!(count("guau"), 1);
    }

    #[test]
    fn diphthong_scan_does_not_overlap() {
        // "ai" is consumed, so "iu" is never seen.
        assert_eq!(count_diphthongs("aiu"), 1);
        assert_eq!(count("aiu"), 2);
    }

    #[test]
    fn accented_weak_vowel_breaks_diphthong() {
        assert_eq!(count("país"), 2);
        assert_eq!(count("oía"), 3);
        assert_eq!(count("reír"), 2);
        assert_eq!(count("biología"), 4);
    }

    #[test]
    fn weak_pairs_form_diphthongs() {
        assert_eq!(count("ciudad"), 2);
        assert_eq!(count("cuidado"), 3);
        assert_eq!(count("huir"), 1);
    }

    #[test]
    fn never_below_one() {
        for word in ["a", "ui", "iai", "aeiou", "uaiuaiu", "bcd", "ñ", "áéíóú"] {
            assert!(count(word) >= 1, "{word}");
        }
    }
}
