//! Configuration loading and discovery.
//!
//! Configuration only covers the tool's own plumbing (logging, input size
//! limit). The style heuristics have fixed thresholds and are not
//! configurable.
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Sources, lowest precedence first
//!
//! 1. built-in defaults
//! 2. the user config, `config.<ext>` in the platform config directory
//!    (`~/.config/stylecheck/` on Linux)
//! 3. the nearest `.stylecheck.<ext>` and `stylecheck.<ext>` found walking up
//!    from the working directory, stopping at a `.git` directory
//! 4. the file named by `--config`
//! 5. `STYLECHECK_LOG_LEVEL`, `STYLECHECK_LOG_DIR`,
//!    `STYLECHECK_MAX_INPUT_BYTES`, `STYLECHECK_DISABLE_INPUT_LIMIT`
//!
//! # Example
//! ```no_run
//! use camino::{Utf8Path, Utf8PathBuf};
use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// The configuration for stylecheck.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level used when neither `-v`, `-q` nor `RUST_LOG` is given.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No log file is written if unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// The effective input size limit, or `None` if limits are disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information.
    Info,
    /// Warnings about potential issues (default).
    #[default]
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which files contributed to a loaded [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// User config file, if one exists.
    pub user_file: Option<Utf8PathBuf>,
    /// Project config files from the nearest directory that has any.
    pub project_files: Vec<Utf8PathBuf>,
    /// File passed with `--config`.
    pub explicit_file: Option<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file with the highest precedence among those loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_file
            .as_deref()
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }

    fn in_merge_order(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_file)
            .map(Utf8PathBuf::as_path)
    }
}

const APP_NAME: &str = "stylecheck";

const ENV_PREFIX: &str = "STYLECHECK_";

/// Fields that may be overridden from the environment.
const ENV_KEYS: [&str; 4] = [
    "log_level",
    "log_dir",
    "max_input_bytes",
    "disable_input_limit",
];

/// Extensions tried for every config file name, lowest precedence first.
const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Project discovery does not climb past a directory holding this entry.
const REPO_MARKER: &str = ".git";

/// Loads [`Config`] from the user config, project config, an optional
/// explicit file, and the environment.
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_dir: Option<Utf8PathBuf>,
    explicit_file: Option<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user config but searches no project directory.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_dir: user_config_dir(),
            explicit_file: None,
        }
    }

    /// Look for project config starting at `dir` and walking up.
    pub fn with_project_search(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Load `path` on top of any discovered config. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.explicit_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and extract the final [`Config`].
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        if let Some(ref file) = self.explicit_file
            && !file.is_file()
        {
            return Err(ConfigError::MissingFile(file.clone()));
        }

        let sources = ConfigSources {
            user_file: self.user_dir.as_deref().and_then(find_user_file),
            project_files: self
                .search_root
                .as_deref()
                .map(find_project_files)
                .unwrap_or_default(),
            explicit_file: self.explicit_file,
        };

        let figment = sources
            .in_merge_order()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                merge_config_file,
            )
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            log_level = config.log_level.as_str(),
            input_limit = ?config.input_limit(),
            config_file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// The platform config directory for stylecheck.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

fn find_user_file(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Config files in the nearest directory, from `start` upward, that has any.
///
/// Within a directory, dotfiles load before regular files and extensions in
/// [`CONFIG_EXTENSIONS`] order, so `stylecheck.json` has the last word.
fn find_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [".", ""]
            .iter()
            .flat_map(|prefix| {
                CONFIG_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{prefix}{APP_NAME}.{ext}")))
            })
            .filter(|path| path.is_file())
            .collect();

        if !found.is_empty() {
            return found;
        }
        if dir.join(REPO_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn merge_config_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}
