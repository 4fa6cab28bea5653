//! Standalone TUI binary for Virtue Dice.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use vd_engine::{Catalog, ChangePolicy, DiceEngine, EngineConfig};

#[derive(Parser)]
#[command(name = "vd-tui", about = "Terminal dice roller for the four virtue dice", version)]
struct Args {
    /// RNG seed for reproducible rolls (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the four die types (default: built-in virtues)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Whether a clamped count change still counts as a change (always, on-move)
    #[arg(long, default_value = "always")]
    change_policy: String,

    /// Append debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    vd_tui::logging::init(args.log_file.as_deref())?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path).map_err(|e| e.to_string())?,
        None => Catalog::default(),
    };
    let policy = ChangePolicy::from_name(&args.change_policy)
        .ok_or_else(|| format!("unknown change policy: {}", args.change_policy))?;

    let mut config = EngineConfig::default().with_change_policy(policy);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = vd_tui::app::TuiApp::new(DiceEngine::new(catalog, config));
    vd_tui::terminal::run(app)
}
