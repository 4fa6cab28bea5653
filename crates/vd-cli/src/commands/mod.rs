pub mod catalog;
pub mod play;
pub mod roll;
pub mod tui;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use vd_engine::{Catalog, ChangePolicy, DiceEngine, EngineConfig};

/// Install a stderr logger. `-v` turns on engine debug events; `RUST_LOG` overrides.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "vd_engine=debug,vd=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    // A second install (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the catalog from a file, or use the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::from_file(path).map_err(|e| e.to_string()),
        None => Ok(Catalog::default()),
    }
}

/// Build an engine from CLI options.
fn build_engine(
    catalog: Option<&Path>,
    seed: Option<u64>,
    change_policy: &str,
) -> Result<DiceEngine, String> {
    let catalog = load_catalog(catalog)?;
    let policy = ChangePolicy::from_name(change_policy)
        .ok_or_else(|| format!("unknown change policy: {change_policy} (use always or on-move)"))?;

    let mut config = EngineConfig::default().with_change_policy(policy);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(DiceEngine::new(catalog, config))
}
