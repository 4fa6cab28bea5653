//! Tracing setup for the TUI.
//!
//! The alternate screen owns stdout and stderr, so logs only go to a file.
//! Without a log file nothing is installed and events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "vd_engine=debug,vd_tui=debug";

/// Send tracing output to `path` (appending), filtered by `RUST_LOG`.
pub fn init(path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("cannot install logger: {e}"))
}
