use std::collections::HashSet;
use std::path::Path;

use colored::{Color, Colorize};
use serde::Serialize;
use tracing::debug;

use vd_engine::{
    ClassColor, DiceEngine, DieSlot, DieType, EngineState, FaceGlyph, MAX_DICE, UiState, glyph,
};

/// What `vd roll --json` prints: the engine state plus the derived UI state.
#[derive(Serialize)]
struct RollReport<'a> {
    state: &'a EngineState,
    ui: UiState,
}

pub fn run(
    catalog: Option<&Path>,
    dice: &[String],
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut engine = super::build_engine(catalog, seed, "always")?;

    let mut seen = HashSet::new();
    for pair in dice {
        let (key, count) = parse_dice(&engine, pair)?;
        if !seen.insert(key.clone()) {
            return Err(format!("die '{key}' given more than once"));
        }
        debug!(die = %key, count, "selecting dice");
        for _ in 0..count.min(MAX_DICE) {
            engine.increment(&key);
        }
    }

    if !engine.roll() {
        return Err("no dice selected (pass at least one --dice DIE=N with N > 0)".into());
    }

    if json {
        print_json(&engine)
    } else {
        print_text(&engine);
        Ok(())
    }
}

/// Parse `DIE=N` into the die's key and the requested count.
fn parse_dice(engine: &DiceEngine, pair: &str) -> Result<(String, u32), String> {
    let (name, count) = pair
        .split_once('=')
        .ok_or_else(|| format!("expected DIE=N, got '{pair}'"))?;
    let die = engine
        .catalog()
        .find(name.trim())
        .ok_or_else(|| format!("unknown die: {}", name.trim()))?;
    let count: u32 = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid count in '{pair}'"))?;
    Ok((die.key.clone(), count))
}

fn print_text(engine: &DiceEngine) {
    let state = engine.state();
    for die in engine.catalog() {
        let slots = state.slots(&die.key);
        if slots.is_empty() {
            continue;
        }
        let color = terminal_color(die);
        let faces: Vec<String> = slots.iter().map(|s| face_text(s, die)).collect();
        println!(
            "  {} {} {}",
            format!(" {} ", die.display_code).black().on_color(color).bold(),
            format!("{:<10}", die.virtue).color(color).bold(),
            faces.join("  ")
        );
    }
    println!();
    println!("  {}", engine.ui().status.to_string().dimmed());
}

fn face_text(slot: &DieSlot, die: &DieType) -> String {
    match glyph(slot.face, die) {
        FaceGlyph::Cross => "X".red().bold().to_string(),
        FaceGlyph::Pips { value, .. } => value.to_string(),
        FaceGlyph::Six { .. } => "6".bold().to_string(),
    }
}

fn terminal_color(die: &DieType) -> Color {
    match die.color() {
        ClassColor::Blue => Color::Blue,
        ClassColor::Yellow => Color::Yellow,
        ClassColor::Red => Color::Red,
        ClassColor::Purple => Color::Magenta,
        ClassColor::Green => Color::Green,
        ClassColor::Cyan => Color::Cyan,
        ClassColor::Plain => Color::White,
    }
}

fn print_json(engine: &DiceEngine) -> Result<(), String> {
    let report = RollReport {
        state: engine.state(),
        ui: engine.ui(),
    };
    let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
