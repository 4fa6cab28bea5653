//! Run the terminal UI in-process.

use std::path::Path;

use vd_tui::app::TuiApp;

/// Build an engine and hand the terminal over to the TUI.
pub fn run(
    catalog: Option<&Path>,
    seed: Option<u64>,
    change_policy: &str,
    log_file: Option<&Path>,
) -> Result<(), String> {
    vd_tui::logging::init(log_file)?;
    let engine = super::build_engine(catalog, seed, change_policy)?;
    vd_tui::terminal::run(TuiApp::new(engine))
}
