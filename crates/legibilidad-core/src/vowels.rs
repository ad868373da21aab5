//! Spanish vowel classification.
//!
//! Vowels split along two axes: strong (open) vs. weak (closed), and
//! stressed (written accent) vs. unstressed. Only weak vowels form
//! diphthongs and triphthongs with their neighbours.
//!
//! Every check expects lower-case input. Upper-case letters are not
//! recognised as vowels.

/// Strong vowels without a written accent.
pub const STRONG_UNSTRESSED: &str = "aeo";
/// Strong vowels carrying a written accent.
pub const STRONG_STRESSED: &str = "áéó";
/// Weak vowels without a written accent.
pub const WEAK_UNSTRESSED: &str = "iu";
/// Weak vowels carrying a written accent.
pub const WEAK_STRESSED: &str = "íú";

/// The class a single vowel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelClass {
    /// `a`, `e`, `o`.
    StrongUnstressed,
    /// `á`, `é`, `ó`.
    StrongStressed,
    /// `i`, `u`.
    WeakUnstressed,
    /// `í`, `ú`.
    WeakStressed,
}

impl VowelClass {
    /// Whether this is a strong (open) vowel.
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::StrongUnstressed | Self::StrongStressed)
    }

    /// Whether this is a weak (closed) vowel.
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::WeakUnstressed | Self::WeakStressed)
    }

    /// Whether the vowel carries a written accent.
    pub const fn is_stressed(self) -> bool {
        matches!(self, Self::StrongStressed | Self::WeakStressed)
    }
}

/// Classify a lower-case character, returning `None` for non-vowels.
pub const fn classify(ch: char) -> Option<VowelClass> {
    match ch {
        'a' | 'e' | 'o' => Some(VowelClass::StrongUnstressed),
        'á' | 'é' | 'ó' => Some(VowelClass::StrongStressed),
        'i' | 'u' => Some(VowelClass::WeakUnstressed),
        'í' | 'ú' => Some(VowelClass::WeakStressed),
        _ => None,
    }
}

/// Whether `ch` is any Spanish vowel.
pub const fn is_vowel(ch: char) -> bool {
    classify(ch).is_some()
}

/// Whether `ch` is a strong vowel, accented or not.
pub const fn is_strong(ch: char) -> bool {
    matches!(classify(ch), Some(class) if class.is_strong())
}

/// Whether `ch` is a weak vowel, accented or not.
pub const fn is_weak(ch: char) -> bool {
    matches!(classify(ch), Some(class) if class.is_weak())
}

/// Whether `ch` is `i` or `u` without an accent.
pub const fn is_weak_unstressed(ch: char) -> bool {
    matches!(classify(ch), Some(VowelClass::WeakUnstressed))
}

/// Whether `ch` is an accented vowel.
pub const fn is_stressed(ch: char) -> bool {
    matches!(classify(ch), Some(class) if class.is_stressed())
}
