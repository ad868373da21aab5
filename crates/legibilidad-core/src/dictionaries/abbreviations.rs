//! Spanish abbreviations for sentence boundary detection.
//!
//! A period after any of these does not end a sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not trigger sentence breaks, lower-case and
/// without their final period.
///
/// Only forms that are never complete Spanish words belong here: "don",
/// "col" or "vid" end ordinary sentences.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and forms of address
    set.extend([
        "sr", "sra", "srta", "sres", "sras", "dr", "dra", "dres", "lic", "ing", "arq", "prof",
        "profa", "dña", "ud", "uds", "vd", "vds", "sto", "sta", "fr", "mons", "excmo",
        "excma", "ilmo", "ilma", "gral", "cnel", "tte", "sgto", "cap", "pbro",
    ]);

    // References and citations
    set.extend([
        "etc", "pág", "págs", "p", "pp", "vol", "vols", "núm", "nº", "art", "fig", "ej", "cf",
        "op", "cit", "ibíd", "íd", "cap", "ed", "eds", "trad", "n", "c",
    ]);

    // Dates
    set.extend([
        "ene", "feb", "abr", "jun", "jul", "ago", "sept", "sep", "oct", "nov", "dic", "lun",
        "mié", "jue", "vie", "sáb", "dom", "a.c", "d.c", "a.m", "p.m",
    ]);

    // Places and organisations
    set.extend([
        "av", "avda", "pza", "pl", "dto", "dpto", "depto", "ee.uu", "s.a", "s.l", "cía", "hnos",
        "admón", "atte", "esq", "apdo", "tel",
    ]);

    // Units and quantities
    set.extend([
        "aprox", "km", "kg", "cm", "mm", "ml", "gr", "min", "máx", "mín", "seg", "hrs",
    ]);

    set
});

/// Check if a word is a known abbreviation, ignoring case and periods.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_abbreviations() {
        assert!(is_abbreviation("Sr"));
        assert!(is_abbreviation("sra."));
        assert!(is_abbreviation("etc"));
        assert!(is_abbreviation("pág"));
        assert!(is_abbreviation("EE.UU"));
    }

    #[test]
    fn ordinary_words_are_not_abbreviations() {
        assert!(!is_abbreviation("casa"));
        assert!(!is_abbreviation("mar"));
        assert!(!is_abbreviation("camino"));
        assert!(!is_abbreviation("don"));
        assert!(!is_abbreviation("col"));
        assert!(!is_abbreviation("vid"));
    }
}
