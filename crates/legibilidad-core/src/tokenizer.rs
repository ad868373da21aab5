//! Tokenization and annotation of Spanish prose.
//!
//! The analyzer only depends on the [`Tokenizer`] trait: raw text in, an
//! [`AnnotatedDocument`] out. [`SpanishTokenizer`] is the built-in
//! implementation; any closure with the right signature works too, which is
//! how external linguistic engines plug in.

use std::collections::HashSet;

use crate::dictionaries::{abbreviations::is_abbreviation, stopwords::is_stopword};
use crate::document::{AnnotatedDocument, AnnotatedToken, Sentence};
use crate::error::AnalysisResult;

/// Turns raw text into an annotated document.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into sentences and flagged tokens.
    ///
    /// Implementations must never emit empty tokens.
    fn annotate(&self, text: &str) -> AnalysisResult<AnnotatedDocument>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> AnalysisResult<AnnotatedDocument> + Send + Sync,
{
    fn annotate(&self, text: &str) -> AnalysisResult<AnnotatedDocument> {
        self(text)
    }
}

/// Rule-based tokenizer for Spanish.
///
/// - Sentences end at `.`, `!`, `?` or `…` unless context says otherwise
///   (abbreviations, initials, a period glued to the next word, a
///   lower-case continuation).
/// - Runs of letters and digits are words; every other visible character is
///   a punctuation token; whitespace other than a single space becomes a
///   whitespace token.
/// - Words found in the Spanish stop-word list, or in the extra list given
///   at construction, are flagged as stop words.
#[derive(Debug, Clone, Default)]
pub struct SpanishTokenizer {
    extra_stopwords: HashSet<String>,
}

impl SpanishTokenizer {
    /// Create a tokenizer using only the built-in stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag these words as stop words too (case-insensitive).
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    fn is_stop(&self, word: &str) -> bool {
        is_stopword(word) || self.extra_stopwords.contains(&word.to_lowercase())
    }

    /// Split one sentence into annotated tokens.
    pub fn tokenize_sentence(&self, sentence: &str) -> Sentence {
        let chars: Vec<char> = sentence.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let start = i;

            if ch.is_alphanumeric() {
                // Whether every character since the word start or the last
                // separator is a digit.
                let mut digit_group = ch.is_ascii_digit();
                i += 1;
                while i < chars.len() {
                    if chars[i].is_alphanumeric() {
                        digit_group &= chars[i].is_ascii_digit();
                        i += 1;
                    } else if digit_group && is_number_separator(&chars, i) {
                        i += 2;
                    } else {
                        break;
                    }
                }
                let word: String = chars[start..i].iter().collect();
                let stop = self.is_stop(&word);
                tokens.push(AnnotatedToken::word(word, stop));
            } else if ch.is_whitespace() {
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                if !(i - start == 1 && ch == ' ') {
                    let space: String = chars[start..i].iter().collect();
                    tokens.push(AnnotatedToken::whitespace(space));
                }
            } else {
                tokens.push(AnnotatedToken::punctuation(ch.to_string()));
                i += 1;
            }
        }

        tokens
    }
}

impl Tokenizer for SpanishTokenizer {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn annotate(&self, text: &str) -> AnalysisResult<AnnotatedDocument> {
        let sentences: Vec<Sentence> = split_sentences(text)
            .iter()
            .map(|s| self.tokenize_sentence(s))
            .collect();
        tracing::debug!(sentences = sentences.len(), "annotated text");
        Ok(AnnotatedDocument::new(sentences))
    }
}

/// A `.` or `,` followed by a digit, after a group of digits (`3,14`,
/// `1.000.000`).
fn is_number_separator(chars: &[char], pos: usize) -> bool {
    matches!(chars[pos], '.' | ',') && chars.get(pos + 1).is_some_and(char::is_ascii_digit)
}

/// Split text into sentences.
///
/// Uses a character scan with context-based boundary detection. Fragments
/// without any letter or digit (stray punctuation) are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    if text.trim().is_empty() {
        return sentences;
    }

    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        // Only the last mark of a run ("?!", "...") decides.
        let run_continues = chars.get(i + 1).copied().is_some_and(is_sentence_terminator);
        if is_sentence_terminator(ch) && !run_continues {
            let context = extract_context(&chars, i);

            if is_sentence_boundary(&context) {
                // Closing quotes and brackets stay with their sentence.
                while let Some(&next) = chars.get(i + 1)
                    && is_closer(next)
                {
                    current.push(next);
                    i += 1;
                }
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }

        i += 1;
    }

    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if sentence.chars().any(char::is_alphanumeric) {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

/// Characters that open a sentence before its first letter.
const fn is_opener(ch: char) -> bool {
    matches!(
        ch,
        '¿' | '¡' | '«' | '"' | '\'' | '“' | '‘' | '(' | '[' | '—' | '–' | '-'
    )
}

/// Characters that close a quotation or aside after its final mark.
const fn is_closer(ch: char) -> bool {
    matches!(ch, '»' | '"' | '\'' | '”' | '’' | ')' | ']')
}

/// Longest run before a period that can still be an abbreviation or a set
/// of initials ("J.R.R.", "ee.uu.", "excma.").
const MAX_ABBREVIATION_CHARS: usize = 10;

/// Context around a potential sentence boundary.
struct SentenceContext<'a> {
    chars: &'a [char],
    pos: usize,
    punctuation: char,
    /// First visible character of the next sentence, skipping closers
    /// and openers (`¿`, `«`, `—`).
    next_letter: Option<char>,
    /// Character right after the mark.
    char_after: Option<char>,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext<'_> {
    let mut after_start = pos + 1;
    while after_start < chars.len()
        && (chars[after_start].is_whitespace() || is_closer(chars[after_start]))
    {
        after_start += 1;
    }

    let next_letter = chars[after_start.min(chars.len())..]
        .iter()
        .copied()
        .find(|c| !is_opener(*c) && !c.is_whitespace());

    SentenceContext {
        chars,
        pos,
        punctuation: chars[pos],
        next_letter,
        char_after: chars.get(pos + 1).copied(),
        is_end_of_text: chars[pos + 1..].iter().all(|c| c.is_whitespace() || is_closer(*c)),
    }
}

/// The word (letters, digits and inner periods) ending right before the
/// terminator at `pos`, or `None` when it is longer than any abbreviation.
fn get_word_before(chars: &[char], pos: usize) -> Option<String> {
    let mut end = pos;
    while end > 0 && is_sentence_terminator(chars[end - 1]) {
        end -= 1;
    }

    let mut start = end;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '.') {
        if end - start == MAX_ABBREVIATION_CHARS {
            return None;
        }
        start -= 1;
    }

    Some(chars[start..end].iter().collect())
}

fn is_sentence_boundary(context: &SentenceContext) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // A lower-case continuation never starts a new sentence:
    // "¿Vienes? —preguntó", "Esperó... y esperó".
    if context.next_letter.is_some_and(char::is_lowercase) {
        return false;
    }

    if context.punctuation != '.' {
        return true;
    }

    // Glued to what follows: "1.000", "EE.UU.", "www.ejemplo.com".
    if context.char_after.is_some_and(char::is_alphanumeric) {
        return false;
    }

    !get_word_before(context.chars, context.pos).is_some_and(|word| is_likely_abbreviation(&word))
}

fn is_likely_abbreviation(word: &str) -> bool {
    let word_clean = word.trim_end_matches('.');
    if word_clean.is_empty() {
        return false;
    }
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single upper-case letter, or dotted initials ("J.", "J.R.").
    word_clean
        .split('.')
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_uppercase))
}
