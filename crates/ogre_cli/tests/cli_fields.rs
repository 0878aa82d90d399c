use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use ogre_core::checksum::checksum_of;
use ogre_core::layout::{SLOT_COUNT, SLOT_SIZE, START_ADDRESS};
use serde_json::Value;
use tempfile::TempDir;

const FILE_LEN: usize = START_ADDRESS + SLOT_COUNT * SLOT_SIZE;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ogre-se"))
        .args(args)
        .output()
        .expect("failed to run ogre-se CLI")
}

fn put(bytes: &mut [u8], slot: usize, offset: usize, data: &[u8]) {
    let start = START_ADDRESS + slot * SLOT_SIZE + offset;
    bytes[start..start + data.len()].copy_from_slice(data);
}

/// Slot 0: leader "ARES", money 1000, unit 5 a level 3 Ninja. Checksums are valid.
fn write_fixture(dir: &TempDir) -> PathBuf {
    let mut bytes = vec![0u8; FILE_LEN];
    put(&mut bytes, 0, 0x0910, b"ARES");
    put(&mut bytes, 0, 0x092b, &[0xe8, 0x03]);
    put(&mut bytes, 0, 0x0069 + 5, &[0x08]);
    put(&mut bytes, 0, 0x0131 + 5, &[0x03]);
    put(&mut bytes, 0, 0x0645 + 5 * 2, &[0x01, 0x00]);
    for slot in 0..SLOT_COUNT {
        let base = START_ADDRESS + slot * SLOT_SIZE;
        let sum = checksum_of(&bytes[base + 0x0003..base + 0x0aa8]);
        put(&mut bytes, slot, 0x0aa8, &sum.to_le_bytes());
    }
    let path = dir.path().join("ogre.srm");
    fs::write(&path, bytes).unwrap();
    path
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn show_unit_text_lists_every_field() {
    let dir = TempDir::new().unwrap();
    let path = path_arg(&write_fixture(&dir));

    let output = run_cli(&[&path, "show", "unit", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=(   5 )=="));
    assert!(stdout.contains("Ninja"));
    assert!(stdout.contains("ARES"));
    assert_eq!(stdout.lines().count(), 13 + 2);
}

#[test]
fn show_unit_json_honours_info_filter() {
    let dir = TempDir::new().unwrap();
    let path = path_arg(&write_fixture(&dir));

    let output = run_cli(&[&path, "--json", "show", "unit", "-i", "LVL", "-i", "CLASS", "5", "6"]);
    assert!(output.status.success());
    let json = stdout_json(&output);

    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(json[0]["unit"], 5);
    assert_eq!(json[0]["fields"][0]["name"], "LVL");
    assert_eq!(json[0]["fields"][0]["value"], 3);
    assert_eq!(json[0]["fields"][1]["formatted"], "Ninja");
    assert_eq!(json[0]["fields"][1]["address"], 0x006f);
    assert_eq!(json[1]["fields"][0]["value"], 0);
}

#[test]
fn show_misc_json_reports_money_and_leader() {
    let dir = TempDir::new().unwrap();
    let path = path_arg(&write_fixture(&dir));

    let output = run_cli(&[&path, "show", "misc", "--json"]);
    assert!(output.status.success());
    let json = stdout_json(&output);

    assert_eq!(json[0]["name"], "LEADER_NAME");
    assert_eq!(json[0]["formatted"], "ARES");
    assert_eq!(json[1]["value"], 1000);
    assert_eq!(json[1]["raw"], serde_json::json!([0xe8, 0x03, 0x00]));
}

#[test]
fn update_unit_persists_and_fixes_checksum() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);
    let path = path_arg(&fixture);
    let before = fs::read(&fixture).unwrap();

    let output = run_cli(&[&path, "update", "unit", "5", "LVL", "99"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "UNIT 5 - LVL: 3 -> 99 [@0x0137 0x03 .. 0x63]");

    let after = fs::read(&fixture).unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[START_ADDRESS + 0x0131 + 5], 99);
    assert_eq!(after[START_ADDRESS + SLOT_SIZE..], before[START_ADDRESS + SLOT_SIZE..]);

    let check = run_cli(&[&path, "fix-checksum", "--dry-run", "--json"]);
    assert!(check.status.success());
    assert_eq!(stdout_json(&check)["matches"], true);
}

#[test]
fn update_misc_json_reports_old_and_new() {
    let dir = TempDir::new().unwrap();
    let path = path_arg(&write_fixture(&dir));

    let output = run_cli(&[&path, "--json", "update", "misc", "MONEY", "250000"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert!(json.get("unit").is_none());
    assert_eq!(json["old"]["value"], 1000);
    assert_eq!(json["new"]["value"], 250000);
}

#[test]
fn update_with_unknown_field_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);
    let path = path_arg(&fixture);
    let before = fs::read(&fixture).unwrap();

    let output = run_cli(&[&path, "update", "unit", "0", "MANA", "5"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FieldNotFound"));
    assert_eq!(fs::read(&fixture).unwrap(), before);
}

#[test]
fn update_rejects_oversized_value() {
    let dir = TempDir::new().unwrap();
    let path = path_arg(&write_fixture(&dir));

    let output = run_cli(&[&path, "update", "unit", "0", "LVL", "256"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("EncodedValueTooLarge"));
}

#[test]
fn other_slots_are_selected_with_slot_flag() {
    let dir = TempDir::new().unwrap();
    let path = path_arg(&write_fixture(&dir));

    let output = run_cli(&[&path, "--slot", "2", "show", "misc", "-i", "MONEY", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["value"], 0);

    let output = run_cli(&[&path, "-s", "3", "show", "misc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("SlotIndexOutOfRange"));
}

#[test]
fn show_misc_tolerates_filler_leader_bytes() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir);
    let mut bytes = fs::read(&fixture).unwrap();
    put(&mut bytes, 1, 0x0910, &[0xff; 8]);
    put(&mut bytes, 1, 0x092f, &[0x2d]);
    fs::write(&fixture, bytes).unwrap();
    let path = path_arg(&fixture);

    let output = run_cli(&[&path, "-s", "1", "show", "misc"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unknown"));
    assert!(stdout.contains("0xFF 0xFF"));

    let output = run_cli(&[&path, "-s", "1", "show", "misc", "--json"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json[0]["formatted"], "unknown");
    assert_eq!(json[2]["name"], "REPUTATION");
    assert_eq!(json[2]["value"], 45);
}
