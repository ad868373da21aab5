//! Syllables command: per-word counts and the reference corpus check.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use legibilidad_core::syllables::{REFERENCE_WORDS, count_syllables, measure_accuracy};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to count.
    #[arg(required_unless_present = "reference")]
    pub words: Vec<String>,

    /// Score the counter against the built-in reference corpus instead.
    #[arg(long, conflicts_with = "words")]
    pub reference: bool,
}

/// Syllable count of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct WordCount {
    /// The word as given.
    pub word: String,
    /// Estimated syllables.
    pub syllables: usize,
}

/// Count syllables for every word.
///
/// # Errors
///
/// Fails on the first empty word.
pub fn count_words<S: AsRef<str>>(words: &[S]) -> anyhow::Result<Vec<WordCount>> {
    words
        .iter()
        .map(|w| {
            let word = w.as_ref();
            let syllables = count_syllables(word)
                .with_context(|| format!("failed to count syllables of {word:?}"))?;
            Ok(WordCount {
                word: word.to_string(),
                syllables,
            })
        })
        .collect()
}

/// Count syllables, or check the counter against the reference corpus.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(reference = args.reference, "executing syllables command");

    if args.reference {
        let report = measure_accuracy(REFERENCE_WORDS);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        for m in &report.mismatches {
            println!(
                "{} {}: expected {}, counted {}",
                "MISS:".red(),
                m.word,
                m.expected,
                m.counted
            );
        }
        let summary = format!(
            "{}/{} words ({:.1}%)",
            report.matches,
            report.total,
            report.accuracy * 100.0
        );
        if report.mismatches.is_empty() {
            println!("{} {summary}", "PASS:".green());
        } else {
            println!("{summary}");
        }
        return Ok(());
    }

    let counts = count_words(&args.words)?;
    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for c in &counts {
            println!("{}\t{}", c.word, c.syllables.bold());
        }
    }
    Ok(())
}
