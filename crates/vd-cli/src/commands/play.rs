use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use colored::Colorize;

use vd_engine::Session;

pub fn run(
    catalog: Option<&Path>,
    script: Option<&Path>,
    seed: Option<u64>,
    change_policy: &str,
) -> Result<(), String> {
    let engine = super::build_engine(catalog, seed, change_policy)?;
    let mut session = Session::new(engine);

    let (reader, echo): (Box<dyn BufRead>, bool) = match script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            (Box::new(BufReader::new(file)), true)
        }
        None => (Box::new(io::stdin().lock()), false),
    };
    let interactive = script.is_none() && io::stdin().is_terminal();

    if interactive {
        println!("  {} Virtue Dice", "Starting".bold());
        println!("  Type 'help' for commands, 'quit' to exit.\n");
    }

    drive(&mut session, reader, interactive, echo)
}

fn drive(
    session: &mut Session,
    mut reader: Box<dyn BufRead>,
    prompt: bool,
    echo: bool,
) -> Result<(), String> {
    let mut line = String::new();

    while !session.is_finished() {
        if prompt {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        if echo {
            println!("> {input}");
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
