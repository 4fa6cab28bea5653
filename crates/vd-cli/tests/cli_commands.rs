//! End-to-end tests for the `vd` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vd() -> Command {
    Command::cargo_bin("vd").unwrap()
}

/// A catalog file with custom virtues.
fn custom_catalog() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dice.json");
    fs::write(
        &path,
        r#"[
  {"key": "green", "display_code": "GRN", "virtue": "Patience", "visual_class": "c-green"},
  {"key": "cyan", "display_code": "CYN", "virtue": "Wit", "visual_class": "c-cyan"},
  {"key": "red", "display_code": "RED", "virtue": "Audacity", "visual_class": "c-red"},
  {"key": "purple", "display_code": "PUR", "virtue": "Fortitude", "visual_class": "c-purple"}
]"#,
    )
    .unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_virtues() {
    vd().arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prudence"))
        .stdout(predicate::str::contains("Speed"))
        .stdout(predicate::str::contains("Audacity"))
        .stdout(predicate::str::contains("Fortitude"))
        .stdout(predicate::str::contains("4 die types"));
}

#[test]
fn catalog_json() {
    let output = vd().args(["catalog", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dice = value.as_array().unwrap();
    assert_eq!(dice.len(), 4);
    assert_eq!(dice[0]["key"], "blue");
    assert_eq!(dice[0]["six_asset"], "images/Prudence.png");
}

#[test]
fn catalog_from_file() {
    let (_dir, path) = custom_catalog();
    vd().arg("--catalog")
        .arg(&path)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patience"))
        .stdout(predicate::str::contains("Prudence").not());
}

#[test]
fn catalog_with_wrong_size_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dice.json");
    fs::write(
        &path,
        r#"[{"key": "blue", "display_code": "BLU", "virtue": "Prudence", "visual_class": "c-blue"}]"#,
    )
    .unwrap();

    vd().arg("--catalog")
        .arg(&path)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_catalog_file_fails() {
    vd().args(["--catalog", "/nonexistent/dice.json", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_json_matches_counts() {
    let output = vd()
        .args(["roll", "-n", "blue=2", "-n", "Audacity=1", "--seed", "42", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["state"]["rolled"], true);
    assert_eq!(value["state"]["changed_since_roll"], false);
    let pools = value["state"]["pools"].as_array().unwrap();
    assert_eq!(pools.len(), 4);

    let expected = [("blue", 2), ("yellow", 0), ("red", 1), ("purple", 0)];
    for (pool, (key, count)) in pools.iter().zip(expected) {
        assert_eq!(pool["key"], key);
        assert_eq!(pool["count"], count);
        let slots = pool["slots"].as_array().unwrap();
        assert_eq!(slots.len(), count);
        for slot in slots {
            let face = slot["face"].as_u64().unwrap();
            assert!((1..=6).contains(&face));
            assert_eq!(slot["rerolls"], 0);
        }
    }

    assert_eq!(value["ui"]["total_selected"], 3);
    assert_eq!(value["ui"]["primary_label"], "Reroll");
    assert_eq!(value["ui"]["reset_enabled"], true);
    assert_eq!(value["ui"]["status"], "TapToReroll");
    assert_eq!(value["ui"]["hint"], "AfterRoll");
}

#[test]
fn roll_is_reproducible_with_seed() {
    let run = || {
        vd().args(["roll", "-n", "PUR=4", "--seed", "9", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_clamps_count() {
    let output = vd()
        .args(["roll", "-n", "yellow=10", "--seed", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ui"]["total_selected"], 4);
    assert_eq!(value["state"]["pools"][1]["count"], 4);
}

#[test]
fn roll_text_shows_status() {
    vd().args(["roll", "-n", "speed=1", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Speed"))
        .stdout(predicate::str::contains("Tap any die to re-roll it."));
}

#[test]
fn roll_without_dice_fails() {
    vd().args(["roll", "-n", "blue=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dice selected"));
}

#[test]
fn roll_rejects_repeated_die() {
    vd().args(["roll", "-n", "blue=2", "-n", "BLU=3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("die 'blue' given more than once"));
}

#[test]
fn roll_unknown_die_fails() {
    vd().args(["roll", "-n", "green=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown die: green"));
}

#[test]
fn roll_malformed_pair_fails() {
    vd().args(["roll", "-n", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected DIE=N"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_from_stdin() {
    vd().args(["play", "--seed", "7"])
        .write_stdin("+ blue\n+ blue\nroll\nrr blue 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prudence: 2"))
        .stdout(predicate::str::contains("Ready: 2 dice selected."))
        .stdout(predicate::str::contains("[Re-roll] [Reset]"))
        .stdout(predicate::str::contains("Prudence #1:"))
        .stdout(predicate::str::contains("(rerolled 1x)"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn play_roll_without_dice() {
    vd().arg("play")
        .write_stdin("roll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dice selected."));
}

#[test]
fn play_reports_unknown_commands_and_continues() {
    vd().arg("play")
        .write_stdin("fly\n+ red\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: fly"))
        .stdout(predicate::str::contains("Audacity: 1"));
}

#[test]
fn play_stops_at_quit() {
    vd().arg("play")
        .write_stdin("quit\n+ red\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye."))
        .stdout(predicate::str::contains("Audacity: 1").not());
}

#[test]
fn play_script_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("session.txt");
    fs::write(&script, "# two purple dice\n+ PUR\n+ PUR\nroll\nreset\nshow\n").unwrap();

    vd().args(["play", "--seed", "3", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("> + PUR"))
        .stdout(predicate::str::contains("Fortitude: 2"))
        .stdout(predicate::str::contains("Reset."))
        .stdout(predicate::str::contains("(Roll) (Reset)"))
        .stdout(predicate::str::contains("two purple dice").not());
}

#[test]
fn clamped_change_reenables_roll_by_default() {
    vd().args(["play", "--seed", "1"])
        .write_stdin("+ blue\nroll\n- yellow\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Roll] [Reset]"));
}

#[test]
fn clamped_change_is_ignored_on_move_policy() {
    vd().args(["play", "--seed", "1", "--change-policy", "on-move"])
        .write_stdin("+ blue\nroll\n- yellow\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Re-roll] [Reset]"))
        .stdout(predicate::str::contains("[Roll] [Reset]").not());
}

#[test]
fn play_rejects_unknown_policy() {
    vd().args(["play", "--change-policy", "sometimes"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown change policy"));
}
