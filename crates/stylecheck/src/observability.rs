//! Logging setup: a stderr console layer plus an optional JSONL log file.
//!
//! Report output goes to stdout and never passes through tracing.

use std::path::{Path, PathBuf};

use anyhow::Context;
use stylecheck_core::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "STYLECHECK_LOG_PATH";
const LOG_DIR_ENV: &str = "STYLECHECK_LOG_DIR";
const LOG_FILE_NAME: &str = "stylecheck.jsonl";

/// Where, if anywhere, log records are written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory that receives `stylecheck.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// `STYLECHECK_LOG_PATH` names the file outright. Otherwise the log goes
    /// into `STYLECHECK_LOG_DIR` or the configured `log_dir`.
    pub fn for_config(config: &Config) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from).or_else(|| {
            config
                .log_dir
                .as_ref()
                .map(|dir| dir.as_std_path().to_path_buf())
        });
        Self { log_path, log_dir }
    }

    /// Directory and file name of the log file, if one is configured.
    pub fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

/// Pick the filter directive from CLI flags, `RUST_LOG`, and the config default.
///
/// `--quiet` and `-v` win over `RUST_LOG`, which wins over the config.
pub fn filter_directive(quiet: bool, verbose: u8, rust_log: Option<&str>, default: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => rust_log
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(default)
            .to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Build the [`EnvFilter`] for this run.
pub fn env_filter(quiet: bool, verbose: u8, default: &str) -> EnvFilter {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(quiet, verbose, rust_log.as_deref(), default);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins() {
        assert_eq!(filter_directive(true, 2, Some("trace"), "warn"), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_directive(false, 1, Some("warn"), "warn"), "debug");
        assert_eq!(filter_directive(false, 3, None, "warn"), "trace");
    }

    #[test]
    fn rust_log_then_config_default() {
        assert_eq!(
            filter_directive(false, 0, Some("stylecheck=trace"), "warn"),
            "stylecheck=trace"
        );
        assert_eq!(filter_directive(false, 0, Some("  "), "info"), "info");
        assert_eq!(filter_directive(false, 0, None, "info"), "info");
    }

    #[test]
    fn log_path_splits_into_dir_and_name() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/sc/run.jsonl")),
            log_dir: Some(PathBuf::from("/ignored")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/var/log/sc"), "run.jsonl".to_string()))
        );
    }

    #[test]
    fn bare_log_path_uses_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            log_dir: None,
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("."), "run.jsonl".to_string()))
        );
    }

    #[test]
    fn log_dir_uses_default_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/tmp/logs"), LOG_FILE_NAME.to_string()))
        );
        assert_eq!(ObservabilityConfig::default().log_file(), None);
    }
}
