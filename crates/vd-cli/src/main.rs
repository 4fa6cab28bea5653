//! CLI frontend for Virtue Dice.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vd",
    about = "Virtue Dice: pick colored dice, roll them, re-roll any face",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file with the four die types (default: built-in virtues)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log engine events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the die types
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a selection of dice once and print the faces
    Roll {
        /// Dice to roll, as DIE=N (die by key, code, or virtue; N clamped to 0-4; each die once)
        #[arg(short = 'n', long = "dice", value_name = "DIE=N", required = true)]
        dice: Vec<String>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive the engine with text commands (type 'help' for the list)
    Play {
        /// Read commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Whether a clamped count change still counts as a change (always, on-move)
        #[arg(long, default_value = "always")]
        change_policy: String,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Whether a clamped count change still counts as a change (always, on-move)
        #[arg(long, default_value = "always")]
        change_policy: String,

        /// Append debug logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it installs its own file logger.
    if !matches!(cli.command, Commands::Tui { .. }) {
        commands::init_logging(cli.verbose);
    }

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::Catalog { json } => commands::catalog::run(catalog, json),
        Commands::Roll { dice, seed, json } => commands::roll::run(catalog, &dice, seed, json),
        Commands::Play {
            script,
            seed,
            change_policy,
        } => commands::play::run(catalog, script.as_deref(), seed, &change_policy),
        Commands::Tui {
            seed,
            change_policy,
            log_file,
        } => commands::tui::run(catalog, seed, &change_policy, log_file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
