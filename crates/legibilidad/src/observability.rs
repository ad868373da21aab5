//! Logging setup for the CLI.
//!
//! Two layers share one filter: a compact console layer on stderr (stdout
//! is reserved for command output and the MCP transport) and a JSONL file
//! layer written through a non-blocking `tracing-appender` worker.
//!
//! Log file location, first match wins:
//! 1. `LEGIBILIDAD_LOG_PATH` - exact file, never rotated
//! 2. `LEGIBILIDAD_LOG_DIR` - directory, rotated daily
//! 3. `log_dir` from configuration - directory, rotated daily
//! 4. the platform data-local directory (`.../legibilidad/logs`), rotated daily

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_LOG_PATH: &str = "LEGIBILIDAD_LOG_PATH";
const ENV_LOG_DIR: &str = "LEGIBILIDAD_LOG_DIR";
const LOG_FILE_PREFIX: &str = "legibilidad";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where the JSONL log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, appended to.
    File(PathBuf),
    /// A directory of daily-rotated files (`legibilidad.YYYY-MM-DD.jsonl`).
    Directory(PathBuf),
    /// The platform default directory; skipped silently if it can't be created.
    DefaultDirectory(PathBuf),
    /// No file logging.
    Disabled,
}

/// Resolved observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Destination of the JSONL log.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log destination from the environment, then the
    /// configured directory, then platform defaults.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
            default_log_dir(),
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let target = if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            LogTarget::File(path)
        } else if let Some(dir) = env_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or(config_dir)
        {
            LogTarget::Directory(dir)
        } else if let Some(dir) = default_dir {
            LogTarget::DefaultDirectory(dir)
        } else {
            LogTarget::Disabled
        };
        Self { target }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "legibilidad")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the level filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, `-v` `debug`,
/// `-vv` and beyond `trace`, and the configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match file_appender(&config.target)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_appender(target: &LogTarget) -> anyhow::Result<Option<RollingFileAppender>> {
    match target {
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy())
                .build(dir)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Ok(Some(appender))
        }
        LogTarget::Directory(dir) => daily_appender(dir).map(Some),
        LogTarget::DefaultDirectory(dir) => Ok(daily_appender(dir).ok()),
        LogTarget::Disabled => Ok(None),
    }
}

fn daily_appender(dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .with_context(|| format!("failed to open log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(p: &str) -> Option<PathBuf> {
        Some(PathBuf::from(p))
    }

    #[test]
    fn env_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            some("/tmp/a.jsonl"),
            some("/tmp/env"),
            some("/tmp/cfg"),
            some("/tmp/default"),
        );
        assert_eq!(cfg.target, LogTarget::File(PathBuf::from("/tmp/a.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(None, some("/tmp/env"), some("/tmp/cfg"), None);
        assert_eq!(cfg.target, LogTarget::Directory(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn config_dir_beats_default() {
        let cfg = ObservabilityConfig::resolve(None, None, some("/tmp/cfg"), some("/tmp/default"));
        assert_eq!(cfg.target, LogTarget::Directory(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let cfg = ObservabilityConfig::resolve(some(""), some(""), None, some("/tmp/default"));
        assert_eq!(
            cfg.target,
            LogTarget::DefaultDirectory(PathBuf::from("/tmp/default"))
        );
    }

    #[test]
    fn nothing_resolvable_disables_file_logging() {
        let cfg = ObservabilityConfig::resolve(None, None, None, None);
        assert_eq!(cfg.target, LogTarget::Disabled);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(true, 2, "info"), "error");
        assert_eq!(level_for(false, 0, "warn"), "warn");
        assert_eq!(level_for(false, 1, "info"), "debug");
        assert_eq!(level_for(false, 3, "info"), "trace");
    }

    #[test]
    fn explicit_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs").join("nested");
        let appender = file_appender(&LogTarget::Directory(dir.clone())).unwrap();
        assert!(appender.is_some());
        assert!(dir.is_dir());
    }
}
