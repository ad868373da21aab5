//! Command-line front end for `legibilidad-core`.
//!
//! The binary in `main.rs` only loads configuration, sets up logging and
//! dispatches; the argument types live here so they can be tested and
//! rendered into docs without spawning a process.
//!
//! - [`Cli`] / [`GlobalArgs`] / [`Commands`]: the clap definitions
//! - [`commands`]: one module per subcommand
//! - `server`: the MCP tools (feature `mcp`)

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Let owo-colors decide from the terminal.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Force colors off.
    Never,
}

impl ColorChoice {
    const fn forced(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }

    /// Install the choice as the process-wide owo-colors override.
    pub fn apply(self) {
        if let Some(on) = self.forced() {
            owo_colors::set_override(on);
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                       Log filter (e.g., debug, legibilidad_core=trace)
    LEGIBILIDAD_LOG_PATH           Write logs to exactly this file
    LEGIBILIDAD_LOG_DIR            Write daily log files into this directory
    LEGIBILIDAD_LOG_LEVEL          Default log level (debug, info, warn, error)
    LEGIBILIDAD_MAX_INPUT_BYTES    Largest accepted input, in bytes
    LEGIBILIDAD_FORMULAS           Formulas to run, e.g. [gunning_fog_index]
";

/// Readability scoring for Spanish prose.
#[derive(Parser)]
#[command(name = "legibilidad", version, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Load this configuration file last, after discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score the readability of one or more files
    Analyze(commands::analyze::AnalyzeArgs),

    /// Count syllables in Spanish words
    Syllables(commands::syllables::SyllablesArgs),

    /// Show version and effective configuration
    Info(commands::info::InfoArgs),

    /// Serve the analyzer as MCP tools over stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// The clap command tree, for docs and completion generators.
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("legibilidad").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&["syllables", "casa", "--json", "-vv", "--color", "never"]).unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.color, ColorChoice::Never);
    }

    #[test]
    fn color_choice_overrides() {
        assert_eq!(ColorChoice::Auto.forced(), None);
        assert_eq!(ColorChoice::Always.forced(), Some(true));
        assert_eq!(ColorChoice::Never.forced(), Some(false));
    }

    #[test]
    fn analyze_accepts_formula_list() {
        let cli = parse(&[
            "analyze",
            "texto.txt",
            "--formulas",
            "gunning_fog_index,coleman_liau_index",
        ])
        .unwrap();
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.formulas.map(|f| f.len()), Some(2));
    }

    #[test]
    fn analyze_rejects_unknown_formula() {
        assert!(parse(&["analyze", "texto.txt", "--formulas", "smog"]).is_err());
    }

    #[test]
    fn analyze_needs_a_file() {
        assert!(parse(&["analyze"]).is_err());
    }
}
