use std::fs;
use std::path::PathBuf;
use std::process::Command;

use ogre_core::layout::{SLOT_COUNT, SLOT_SIZE, START_ADDRESS};
use serde_json::Value;
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ogre-se"))
        .args(args)
        .output()
        .expect("failed to run ogre-se CLI")
}

fn write_save(dir: &TempDir, len: usize) -> PathBuf {
    let path = dir.path().join("layout.srm");
    fs::write(&path, vec![0u8; len]).unwrap();
    path
}

#[test]
fn debug_layout_json_reports_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_save(&dir, START_ADDRESS + SLOT_COUNT * SLOT_SIZE + 16);
    let path = path.to_string_lossy().to_string();

    let output = run_cli(&[&path, "debug", "layout", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    let sections = json["sections"].as_array().expect("sections should be an array");
    assert_eq!(sections.len(), 1 + SLOT_COUNT + 1);
    assert_eq!(sections[0]["id"], "pad");
    assert_eq!(sections[2]["id"], "slot 1");
    assert_eq!(sections[2]["start"], START_ADDRESS + SLOT_SIZE);
    assert_eq!(sections[4]["id"], "tail");
}

#[test]
fn debug_layout_text_works_on_short_files() {
    let dir = TempDir::new().unwrap();
    let path = write_save(&dir, START_ADDRESS + SLOT_SIZE);
    let path = path.to_string_lossy().to_string();

    let output = run_cli(&[&path, "debug", "layout"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("slot 0"));
    assert!(!stdout.contains("slot 1"));
}

#[test]
fn fix_checksum_dry_run_does_not_write() {
    let dir = TempDir::new().unwrap();
    let path = write_save(&dir, START_ADDRESS + SLOT_COUNT * SLOT_SIZE);
    let before = fs::read(&path).unwrap();
    let mut bytes = before.clone();
    bytes[START_ADDRESS + 0x0010] = 0x2a;
    fs::write(&path, &bytes).unwrap();
    let arg = path.to_string_lossy().to_string();

    let output = run_cli(&[&arg, "fix-checksum", "--dry-run"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("COMPUTED_CHECKSUM: 42"));
    assert!(stdout.trim_end().ends_with("STATUS: MISMATCH"));
    assert_eq!(fs::read(&path).unwrap(), bytes);

    let output = run_cli(&[&arg, "fix-checksum"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim_end().ends_with("STATUS: OK"));
    let fixed = fs::read(&path).unwrap();
    assert_eq!(&fixed[START_ADDRESS + 0x0aa8..START_ADDRESS + 0x0aaa], &[0x2a_u8, 0x00]);
}

#[test]
fn missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.srm").to_string_lossy().to_string();
    let output = run_cli(&[&path, "show", "misc"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn usage_errors_exit_with_two() {
    let output = run_cli(&["save.srm", "show"]);
    assert_eq!(output.status.code(), Some(2));
}
