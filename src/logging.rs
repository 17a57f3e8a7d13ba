//! File logging. The terminal belongs to the game, so logs never go to stdout.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable naming a log file when `--log` is not given.
pub const ENV_LOG: &str = "PLATFORMER_LOG";

const DEFAULT_FILTER: &str = "info";

/// `--log` if given, otherwise `PLATFORMER_LOG`.
pub fn log_path(cli: Option<PathBuf>) -> Option<PathBuf> {
    cli.or_else(|| std::env::var_os(ENV_LOG).filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Install a global subscriber appending to `path`. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
