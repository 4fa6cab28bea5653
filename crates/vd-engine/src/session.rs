//! Line-oriented text commands over a [`DiceEngine`].
//!
//! Used by the `vd play` command. Dice are named by key, display code, or
//! virtue, case-insensitively. Face indices are 1-based here since they are
//! typed by people.

use crate::engine::DiceEngine;
use crate::error::{SessionError, SessionResult};

const HELP: &str = "\
Commands:
  + <die>            add a die (also: inc, add)
  - <die>            remove a die (also: dec, remove)
  roll               roll all selected dice (also: r)
  reroll <die> <n>   reroll face n of a die (also: rr)
  reset              clear everything
  show               show counts and results (also: state)
  help               show this help
  quit               leave (also: q)";

/// An interactive text session driving one engine.
pub struct Session {
    engine: DiceEngine,
    finished: bool,
}

impl Session {
    /// Start a session around an engine.
    pub fn new(engine: DiceEngine) -> Self {
        Self {
            engine,
            finished: false,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &DiceEngine {
        &self.engine
    }

    /// True after a `quit` command.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process one line of input and return the text to show.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let mut words = input.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(String::new());
        };
        let args: Vec<&str> = words.collect();

        match cmd.to_lowercase().as_str() {
            "+" | "inc" | "add" => self.do_increment(&args),
            "-" | "dec" | "remove" => self.do_decrement(&args),
            "roll" | "r" => Ok(self.do_roll()),
            "reroll" | "rr" => self.do_reroll(&args),
            "reset" => {
                self.engine.reset();
                Ok(format!("Reset.\n{}", self.engine.ui().status))
            }
            "show" | "state" => Ok(describe(&self.engine)),
            "help" | "?" => Ok(HELP.to_string()),
            "quit" | "q" | "exit" => {
                self.finished = true;
                Ok("Goodbye.".to_string())
            }
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    /// Resolve a typed die name to its catalog key.
    fn resolve(&self, args: &[&str]) -> SessionResult<String> {
        let name = args.first().ok_or(SessionError::MissingArgument("die"))?;
        self.engine
            .catalog()
            .find(name)
            .map(|d| d.key.clone())
            .ok_or_else(|| SessionError::UnknownDie((*name).to_string()))
    }

    fn do_increment(&mut self, args: &[&str]) -> SessionResult<String> {
        let key = self.resolve(args)?;
        self.engine.increment(&key);
        Ok(self.count_line(&key))
    }

    fn do_decrement(&mut self, args: &[&str]) -> SessionResult<String> {
        let key = self.resolve(args)?;
        self.engine.decrement(&key);
        Ok(self.count_line(&key))
    }

    fn count_line(&self, key: &str) -> String {
        let virtue = self
            .engine
            .catalog()
            .get(key)
            .map(|d| d.virtue.as_str())
            .unwrap_or(key);
        let count = self.engine.state().count(key).unwrap_or(0);
        format!("{virtue}: {count}\n{}", self.engine.ui().status)
    }

    fn do_roll(&mut self) -> String {
        if self.engine.roll() {
            describe(&self.engine)
        } else {
            "No dice selected. Add some with '+ <die>' first.".to_string()
        }
    }

    fn do_reroll(&mut self, args: &[&str]) -> SessionResult<String> {
        let key = self.resolve(args)?;
        let raw = args
            .get(1)
            .ok_or(SessionError::MissingArgument("face number"))?;
        let index = raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| SessionError::InvalidIndex((*raw).to_string()))?;

        let virtue = self
            .engine
            .catalog()
            .get(&key)
            .map(|d| d.virtue.clone())
            .unwrap_or_else(|| key.clone());

        Ok(match self.engine.reroll(&key, index) {
            Some(slot) => format!(
                "{virtue} #{}: {} (rerolled {}x)",
                index + 1,
                slot.face,
                slot.rerolls
            ),
            None => format!("Nothing to reroll at {virtue} #{}.", index + 1),
        })
    }
}

/// Plain-text picture of the engine: one line per die type, then buttons and status.
pub fn describe(engine: &DiceEngine) -> String {
    let state = engine.state();
    let ui = engine.ui();
    let mut lines = Vec::new();

    for die in engine.catalog() {
        let count = state.count(&die.key).unwrap_or(0);
        let faces: Vec<String> = state.slots(&die.key).iter().map(|s| s.to_string()).collect();
        let faces = if faces.is_empty() {
            "-".to_string()
        } else {
            faces.join("  ")
        };
        lines.push(format!(
            "{:<10} {} x{count}  {faces}",
            die.virtue, die.display_code
        ));
    }

    let button = |label: &str, enabled: bool| {
        if enabled {
            format!("[{label}]")
        } else {
            format!("({label})")
        }
    };
    lines.push(format!(
        "{} {}",
        button(ui.primary_label.as_str(), ui.primary_enabled),
        button("Reset", ui.reset_enabled)
    ));
    lines.push(ui.status.to_string());
    lines.join("\n")
}
