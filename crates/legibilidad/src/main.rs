//! legibilidad CLI
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use legibilidad::{Cli, Commands, GlobalArgs, commands};
use legibilidad_core::config::{Config, ConfigLoader, ConfigSources};

mod observability;

fn utf8(path: &Path, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path.to_path_buf()).map_err(|e| {
        anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display())
    })
}

/// Discover configuration from the working directory, plus `--config`.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(&cwd, "current directory")?);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path, "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn run(
    command: Commands,
    global: &GlobalArgs,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => {
            let limit = config.input_limit();
            commands::analyze::cmd_analyze(args, global.json, global.quiet, config, limit)
        }
        Commands::Syllables(args) => commands::syllables::cmd_syllables(args, global.json),
        Commands::Info(args) => commands::info::cmd_info(args, global.json, config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to create async runtime for MCP server")?
            .block_on(commands::serve::cmd_serve(args, config)),
    }
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    cli.global.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    // Without a subcommand clap has already printed help and exited.
    let Some(command) = cli.command.take() else {
        return Ok(());
    };
    let global = &cli.global;

    if let Some(dir) = &global.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(global.config.as_deref())?;

    let log_target = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf()),
    );
    let filter = observability::env_filter(global.quiet, global.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&log_target, filter)
        .context("failed to initialize logging/tracing")?;
    tracing::debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        json = global.json,
        config_file = ?sources.primary_file(),
        "CLI initialized"
    );

    let result = run(command, global, &config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
