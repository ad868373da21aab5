//! Analyze command: readability scores for one or more files.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use legibilidad_core::config::Config;
use legibilidad_core::{
    AnnotatedDocument, FormulaId, ReadabilityReport, SpanishTokenizer, TextAnalyzer,
};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Files to analyze.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Treat files as JSON annotated documents instead of plain text.
    #[arg(long)]
    pub annotated: bool,

    /// Formulas to run (comma-separated). Defaults to the configured set.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub formulas: Option<Vec<FormulaId>>,
}

#[derive(Serialize)]
struct FileReport {
    file: Utf8PathBuf,
    #[serde(flatten)]
    report: ReadabilityReport,
}

/// Build the analyzer described by the configuration and command flags.
pub fn build_analyzer(config: &Config, formulas: Option<&[FormulaId]>) -> TextAnalyzer {
    let tokenizer =
        SpanishTokenizer::new().with_extra_stopwords(config.extra_stopwords.iter().flatten());
    let ids = formulas.map_or_else(|| config.formula_ids(), <[FormulaId]>::to_vec);
    TextAnalyzer::with_tokenizer(tokenizer).with_formulas(&ids)
}

fn analyze_file(
    analyzer: &TextAnalyzer,
    path: &Utf8Path,
    annotated: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<ReadabilityReport> {
    let content = read_input_file(path, max_input_bytes)?;
    let report = if annotated {
        let document = AnnotatedDocument::from_json(&content)
            .with_context(|| format!("failed to parse annotated document {path}"))?;
        analyzer.analyze_document(&document)
    } else {
        analyzer.analyze(&content)
    };
    report.with_context(|| format!("failed to analyze {path}"))
}

/// Score the readability of each file.
#[instrument(name = "cmd_analyze", skip_all, fields(files = args.files.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(annotated = args.annotated, formulas = ?args.formulas, "executing analyze command");

    let analyzer = build_analyzer(config, args.formulas.as_deref());

    let progress = ProgressBar::new(args.files.len() as u64);
    if quiet || args.files.len() < 2 {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .context("invalid progress template")?
            .progress_chars("=> "),
    );

    let mut reports = Vec::with_capacity(args.files.len());
    for file in args.files {
        progress.set_message(file.to_string());
        let report = analyze_file(&analyzer, &file, args.annotated, max_input_bytes)?;
        reports.push(FileReport { file, report });
        progress.inc(1);
    }
    progress.finish_and_clear();

    if global_json {
        let json = match reports.as_slice() {
            [single] => serde_json::to_string_pretty(&single.report)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{json}");
        return Ok(());
    }

    let show_names = reports.len() > 1;
    for (i, r) in reports.iter().enumerate() {
        if show_names {
            if i > 0 {
                println!();
            }
            println!("{}", r.file.bold().underline());
        }
        print_report(&r.report);
    }
    Ok(())
}

fn print_report(report: &ReadabilityReport) {
    let width = report
        .scores
        .iter()
        .map(|s| s.id.as_str().len())
        .max()
        .unwrap_or(0);
    for s in &report.scores {
        println!(
            "{:<width$}  {:>7.2}  {}",
            s.id.as_str(),
            s.score,
            s.label.cyan(),
        );
    }

    let m = &report.metrics;
    println!(
        "{}",
        format!(
            "{} sentences, {} words, {} syllables, {} letters, {} complex words",
            m.sentence_count, m.word_count, m.syllable_count, m.letter_count, m.complex_word_count
        )
        .dimmed()
    );
}
