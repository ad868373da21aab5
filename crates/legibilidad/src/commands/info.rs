//! Info command: version and effective configuration.

use camino::Utf8PathBuf;
use clap::Args;
use legibilidad_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand (none; output follows `--json`).
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Build {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

const BUILD: Build = Build {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    repository: env!("CARGO_PKG_REPOSITORY"),
    license: env!("CARGO_PKG_LICENSE"),
};

/// Settings after every source was merged.
#[derive(Serialize)]
struct Effective {
    /// Highest-precedence file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<Utf8PathBuf>,
    /// Every merged file, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    loaded_files: Vec<Utf8PathBuf>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<Utf8PathBuf>,
    /// `null` when the limit is disabled.
    max_input_bytes: Option<usize>,
    formulas: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra_stopwords: Vec<String>,
}

impl Effective {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToOwned::to_owned),
            loaded_files: sources
                .user_file
                .iter()
                .chain(&sources.project_files)
                .chain(&sources.explicit_files)
                .cloned()
                .collect(),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.clone(),
            max_input_bytes: config.input_limit(),
            formulas: config.formula_ids().iter().map(|id| id.as_str()).collect(),
            extra_stopwords: config.extra_stopwords.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct Info {
    #[serde(flatten)]
    build: Build,
    config: Effective,
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<18} {value}", label.dimmed());
}

fn print_text(info: &Info) {
    let Info { build, config } = info;
    println!("{} {}", build.name.bold(), build.version.green());
    if !build.description.is_empty() {
        println!("{}", build.description);
    }
    if !build.license.is_empty() {
        row("license", build.license);
    }
    if !build.repository.is_empty() {
        row("repository", build.repository.cyan());
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    match &config.config_file {
        Some(path) => row("file", path.cyan()),
        None => row("file", "none loaded".yellow()),
    }
    row("log level", config.log_level);
    if let Some(dir) = &config.log_dir {
        row("log directory", dir);
    }
    match config.max_input_bytes {
        Some(max) => row("input limit", format!("{max} bytes")),
        None => row("input limit", "disabled".yellow()),
    }
    row("formulas", config.formulas.join(", "));
    if !config.extra_stopwords.is_empty() {
        row("extra stop words", config.extra_stopwords.join(", "));
    }
}

/// Print the version and effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!("executing info command");
    let info = Info {
        build: BUILD,
        config: Effective::new(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_text(&info);
    }
    Ok(())
}
