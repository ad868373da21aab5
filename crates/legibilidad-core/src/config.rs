//! Layered configuration.
//!
//! Sources are merged with figment, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file, `config.<ext>` in the platform config directory
//!    (`~/.config/legibilidad/` on Linux)
//! 3. project files, `.legibilidad.<ext>` then `legibilidad.<ext>`, taken
//!    from the closest directory at or above the search root that has any
//! 4. explicit files, in the order they were added
//! 5. `LEGIBILIDAD_*` environment variables
//!
//! `<ext>` is one of `toml`, `yaml`, `yml` or `json`; within one directory
//! the extensions merge in that order. The upward search stops at the first
//! directory holding a `.git` entry unless told otherwise.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use legibilidad_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! println!("{:?} from {:?}", config.formula_ids(), sources.primary_file());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_INPUT_BYTES;
use crate::error::{ConfigError, ConfigResult};
use crate::formulas::FormulaId;

const APP_NAME: &str = "legibilidad";
const ENV_PREFIX: &str = "LEGIBILIDAD_";
const DEFAULT_BOUNDARY: &str = ".git";

/// Settings shared by the CLI and the MCP server.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Minimum level written to the logs.
    pub log_level: LogLevel,
    /// Where JSONL logs go. Unset means the platform data directory.
    pub log_dir: Option<Utf8PathBuf>,
    /// Largest accepted input, in bytes. Unset means 5 MiB.
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
    /// Formulas to run, in reporting order. Unset means all five.
    pub formulas: Option<Vec<FormulaId>>,
    /// Words to treat as stop words on top of the built-in list.
    ///
    /// Stop words are never complex words, so this lowers the Gunning Fog
    /// index of texts that lean on long function words.
    pub extra_stopwords: Option<Vec<String>>,
}

impl Config {
    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            return None;
        }
        Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }

    /// The formulas to run: the configured subset, or all of them.
    pub fn formula_ids(&self) -> Vec<FormulaId> {
        self.formulas
            .as_deref()
            .map_or_else(|| FormulaId::ALL.to_vec(), <[FormulaId]>::to_vec)
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-formula scores.
    Debug,
    /// Lifecycle events (default).
    #[default]
    Info,
    /// Recoverable problems.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Lower-case name, as accepted by `tracing_subscriber::EnvFilter`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files a [`ConfigLoader`] actually merged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Files from the closest project directory, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The user file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files given explicitly, such as `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The loaded file with the highest precedence.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or_else(|| self.project_files.last())
            .map(Utf8PathBuf::as_path)
            .or(self.user_file.as_deref())
    }

    /// Whether no file contributed at all.
    pub fn is_empty(&self) -> bool {
        self.primary_file().is_none()
    }
}

/// On-disk formats, in merge order within one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    const EXTENSIONS: [(&'static str, Self); 4] = [
        ("toml", Self::Toml),
        ("yaml", Self::Yaml),
        ("yml", Self::Yaml),
        ("json", Self::Json),
    ];

    /// Format implied by a file's extension. Anything unknown is read as TOML.
    fn of(path: &Utf8Path) -> Self {
        Self::EXTENSIONS
            .iter()
            .find(|(ext, _)| path.extension() == Some(*ext))
            .map_or(Self::Toml, |&(_, format)| format)
    }

    fn merge_into(self, figment: Figment, path: &Utf8Path) -> Figment {
        match self {
            Self::Toml => figment.merge(Toml::file_exact(path.as_str())),
            Self::Yaml => figment.merge(Yaml::file_exact(path.as_str())),
            Self::Json => figment.merge(Json::file_exact(path.as_str())),
        }
    }
}

/// Existing files named `{stem}.{ext}` in `dir`, in merge order.
fn existing_files(dir: &Utf8Path, stem: &str) -> impl Iterator<Item = Utf8PathBuf> {
    FileFormat::EXTENSIONS
        .iter()
        .map(move |(ext, _)| dir.join(format!("{stem}.{ext}")))
        .filter(|path| path.is_file())
}

/// Walk up from `start` and return the config files of the first directory
/// that has any.
///
/// A directory containing `boundary` is still searched, but its parents are
/// not, unless it is `start` itself.
fn discover_project_files(start: &Utf8Path, boundary: Option<&str>) -> Vec<Utf8PathBuf> {
    let dotted = format!(".{APP_NAME}");
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = existing_files(dir, &dotted)
            .chain(existing_files(dir, APP_NAME))
            .collect();
        if !found.is_empty() {
            tracing::debug!(%dir, files = found.len(), "found project configuration");
            return found;
        }
        if dir != start && boundary.is_some_and(|marker| dir.join(marker).exists()) {
            break;
        }
    }
    Vec::new()
}

/// Builder that gathers and merges configuration sources.
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    boundary: Option<String>,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user file, stops project search at `.git`,
    /// and has no search root yet.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            boundary: Some(DEFAULT_BOUNDARY.to_string()),
            files: Vec::new(),
        }
    }

    /// Look for project files at `path` and above.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Whether to read the user file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop project search above the first directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary = Some(marker.into());
        self
    }

    /// Search up to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary = None;
        self
    }

    /// Merge `path` after every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    fn collect_sources(&self) -> ConfigSources {
        ConfigSources {
            user_file: self.user_config.then(find_user_file).flatten(),
            project_files: self
                .search_root
                .as_deref()
                .map(|root| discover_project_files(root, self.boundary.as_deref()))
                .unwrap_or_default(),
            explicit_files: self.files.clone(),
        }
    }

    /// Merge every source into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a file cannot be parsed or
    /// holds a value of the wrong shape, such as an unknown formula name.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.collect_sources();

        let figment = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files)
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, path| FileFormat::of(path).merge_into(figment, path),
            )
            // LEGIBILIDAD_MAX_INPUT_BYTES=1048576 sets max_input_bytes.
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails when no file would be read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when there is no user, project or
    /// explicit file, and otherwise whatever [`load`](Self::load) returns.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        if self.collect_sources().is_empty() {
            return Err(ConfigError::NotFound);
        }
        self.load()
    }
}

fn find_user_file() -> Option<Utf8PathBuf> {
    existing_files(&user_config_dir()?, "config").next()
}

/// Platform config directory for legibilidad, if the home directory is known.
///
/// `~/.config/legibilidad/` on Linux and
/// `~/Library/Application Support/legibilidad/` on macOS.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    /// Env-var tests and loads that read the environment take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write `contents` to `dir/name`, creating parents, and return the path.
    fn write(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    fn scratch() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, root)
    }

    /// A loader that ignores the user file and searches up to `/`.
    fn isolated() -> ConfigLoader {
        ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
    }

    #[test]
    fn defaults_without_sources() {
        let _env = env_lock();
        let (config, sources) = isolated().load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));
        assert_eq!(config.formula_ids(), FormulaId::ALL.to_vec());
        assert!(sources.is_empty());
    }

    #[test]
    fn explicit_files_merge_in_order() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        let first = write(&root, "a.toml", "log_level = \"warn\"\nmax_input_bytes = 100\n");
        let second = write(&root, "b.yaml", "log_level: error\n");

        let (config, sources) = isolated().with_file(&first).with_file(&second).load().unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.max_input_bytes, Some(100));
        assert_eq!(sources.primary_file(), Some(second.as_path()));
    }

    #[test]
    fn project_file_found_from_nested_directory() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        write(&root, "libro/.legibilidad.json", r#"{"log_dir": "/var/log/legibilidad"}"#);
        let nested = root.join("libro/capitulos/uno");
        fs::create_dir_all(&nested).unwrap();

        let (config, sources) = isolated().with_project_search(&nested).load().unwrap();

        assert_eq!(config.log_dir.as_deref(), Some(Utf8Path::new("/var/log/legibilidad")));
        assert_eq!(sources.project_files, vec![root.join("libro/.legibilidad.json")]);
    }

    #[test]
    fn regular_file_outranks_dotfile() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        write(&root, ".legibilidad.toml", "log_level = \"debug\"\ndisable_input_limit = true\n");
        write(&root, "legibilidad.yml", "log_level: warn\n");

        let (config, sources) = isolated().with_project_search(&root).load().unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.input_limit(), None);
        assert_eq!(
            sources.project_files,
            vec![root.join(".legibilidad.toml"), root.join("legibilidad.yml")]
        );
    }

    #[test]
    fn parent_files_are_ignored_once_a_closer_one_exists() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        write(&root, "legibilidad.toml", "extra_stopwords = [\"usted\"]\n");
        let inner = write(&root, "inner/legibilidad.toml", "log_level = \"error\"\n");

        let (config, sources) = isolated()
            .with_project_search(root.join("inner"))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.extra_stopwords, None);
        assert_eq!(sources.project_files, vec![inner]);
    }

    #[test]
    fn boundary_marker_ends_the_search() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        write(&root, ".legibilidad.toml", "log_level = \"warn\"\n");
        fs::create_dir_all(root.join("repo/.git")).unwrap();
        let work = root.join("repo/docs");
        fs::create_dir_all(&work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn file_beside_the_boundary_is_still_read() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        fs::create_dir_all(root.join("repo/.git")).unwrap();
        write(&root, "repo/legibilidad.toml", "log_level = \"debug\"\n");
        let work = root.join("repo/docs");
        fs::create_dir_all(&work).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn explicit_file_outranks_project_file() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        write(&root, ".legibilidad.toml", "formulas = [\"coleman_liau_index\"]\n");
        let explicit = write(&root, "otra/config.json", r#"{"formulas": ["gunning_fog_index"]}"#);

        let (config, sources) = isolated()
            .with_project_search(&root)
            .with_file(&explicit)
            .load()
            .unwrap();

        assert_eq!(config.formula_ids(), vec![FormulaId::GunningFogIndex]);
        assert_eq!(sources.project_files.len(), 1);
        assert_eq!(sources.primary_file(), Some(explicit.as_path()));
    }

    #[test]
    fn load_or_error_without_files() {
        let _env = env_lock();
        assert!(matches!(isolated().load_or_error(), Err(ConfigError::NotFound)));
    }

    #[test]
    fn load_or_error_with_a_file() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        let path = write(&root, "config.toml", "log_level = \"debug\"\n");
        let (config, _) = isolated().with_file(&path).load_or_error().unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn unknown_formula_is_rejected() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        let path = write(&root, "config.toml", "formulas = [\"smog\"]\n");
        let result = isolated().with_file(&path).load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        let path = write(&root, "config.toml", "log_level = [\n");
        assert!(isolated().with_file(&path).load().is_err());
    }

    #[test]
    fn unknown_extension_reads_as_toml() {
        assert_eq!(FileFormat::of(Utf8Path::new("ajustes.conf")), FileFormat::Toml);
        assert_eq!(FileFormat::of(Utf8Path::new("a.yml")), FileFormat::Yaml);
        assert_eq!(FileFormat::of(Utf8Path::new("a.json")), FileFormat::Json);
    }

    #[test]
    fn yaml_fields_deserialize() {
        let config: Config = serde_yaml::from_str(
            "log_level: warn\nmax_input_bytes: 2048\nformulas: [flesch_reading_ease_score]\nextra_stopwords: [oye, vale]\n",
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.input_limit(), Some(2048));
        assert_eq!(config.formula_ids(), vec![FormulaId::FleschReadingEaseScore]);
        assert_eq!(
            config.extra_stopwords,
            Some(vec!["oye".to_string(), "vale".to_string()])
        );
    }

    #[test]
    fn disabled_limit_ignores_max_bytes() {
        let config = Config {
            max_input_bytes: Some(1024),
            disable_input_limit: true,
            ..Config::default()
        };
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn user_config_dir_is_named_after_the_app() {
        if let Some(dir) = user_config_dir() {
            assert!(dir.as_str().contains(APP_NAME));
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn environment_outranks_files() {
        let _env = env_lock();
        let (_tmp, root) = scratch();
        let path = write(&root, "config.toml", "log_level = \"debug\"\nmax_input_bytes = 10\n");

        // SAFETY: ENV_LOCK is held, so no other test reads the environment.
        unsafe {
            std::env::set_var("LEGIBILIDAD_LOG_LEVEL", "warn");
            std::env::set_var("LEGIBILIDAD_MAX_INPUT_BYTES", "4096");
        }
        let result = isolated().with_file(&path).load();
        // SAFETY: as above.
        unsafe {
            std::env::remove_var("LEGIBILIDAD_LOG_LEVEL");
            std::env::remove_var("LEGIBILIDAD_MAX_INPUT_BYTES");
        }

        let (config, _) = result.unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.max_input_bytes, Some(4096));
    }
}
