//! stylecheck CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use stylecheck::{Cli, check, usage};
use stylecheck_core::ALL_CHECKS;
use stylecheck_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if cli.list_checks {
        for name in ALL_CHECKS {
            println!("{name}");
        }
        return Ok(());
    }

    // Anything but exactly one file is a usage error, reported without running checks.
    let [file] = cli.files.as_slice() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        println!("{}", usage(&program));
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {dir}"))?;
    }

    let (config, sources) = load_config(cli.config.as_deref())?;

    let _guard = observability::init_observability(
        &observability::ObservabilityConfig::for_config(&config),
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;

    debug!(
        file = %file,
        color = ?cli.color,
        input_limit = ?config.input_limit(),
        config_file = ?sources.primary_file(),
        "starting check"
    );

    check::cmd_check(file, config.input_limit(), cli.color.enabled())
        .inspect_err(|err| tracing::error!(error = %err, "check failed"))
}

/// Merge project config found from the working directory with `--config`.
fn load_config(explicit: Option<&Utf8Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|dir| anyhow::anyhow!("current directory is not valid UTF-8: {}", dir.display()))?;

    let loader = ConfigLoader::new().with_project_search(&cwd);
    let loader = match explicit {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    loader.load().context("failed to load configuration")
}
