//! Tracing setup: append to a log file under the XDG state dir, or stderr.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PLUGKIT_LOG";
const DEFAULT_FILTER: &str = "info,plugkit_core=debug,plugkit_cli=debug";

/// `$XDG_STATE_HOME/plugkit/plugkit.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plugkit")?;
    Ok(xdg_dirs.place_state_file("plugkit.log")?)
}

/// Filter from `PLUGKIT_LOG`, else `fallback`, else the built-in default.
fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Log to the state-dir file. Errors if the file cannot be opened so the
/// caller can fall back to [`init_stderr`].
pub fn init_file(fallback_filter: Option<&str>) -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file: File = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::debug!("plugkit logging to {}", path.display());
    Ok(path)
}

/// Log to stderr. A second initialization is ignored.
pub fn init_stderr(fallback_filter: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// File logging with stderr fallback; never fails.
pub fn init(fallback_filter: Option<&str>) {
    if let Err(e) = init_file(fallback_filter) {
        init_stderr(fallback_filter);
        tracing::warn!("log file unavailable ({:#}); logging to stderr", e);
    }
}
