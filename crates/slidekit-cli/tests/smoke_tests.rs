//! Smoke tests for the slidekit CLI
//!
//! These tests run the real binary end to end.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the slidekit binary
fn slidekit() -> Command {
    let mut cmd = Command::cargo_bin("slidekit").expect("slidekit binary should exist");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    slidekit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.4.1"));
}

#[test]
fn test_help_lists_subcommands() {
    slidekit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_args_fails() {
    slidekit().assert().failure();
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_prints_defaults() {
    slidekit()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("direction: from_top"))
        .stdout(predicate::str::contains("animation_duration: 0.5"))
        .stdout(predicate::str::contains("hide_on_init: true"));
}

#[test]
fn test_config_applies_file_and_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("toast.json");
    fs::write(&path, r#"{"direction":"from_bottom","on_screen_duration":0}"#).unwrap();

    slidekit()
        .args(["config", "--config"])
        .arg(&path)
        .args(["--animation-duration", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("direction: from_bottom"))
        .stdout(predicate::str::contains("animation_duration: 0.25"))
        .stdout(predicate::str::contains("on_screen_duration: 0"));
}

#[test]
fn test_config_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("toast.toml");
    fs::write(&path, "direction = 'from_top'").unwrap();

    slidekit()
        .args(["config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported configuration format"));
}

#[test]
fn test_config_missing_file() {
    slidekit()
        .args(["config", "--config", "/nonexistent/toast.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

// ============================================================================
// simulate
// ============================================================================

#[test]
fn test_simulate_full_cycle_text() {
    slidekit()
        .args(["simulate", "--show-at", "0", "--fps", "4", "--duration", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 ticks at 4 fps"))
        .stdout(predicate::str::contains("show_start"))
        .stdout(predicate::str::contains("hide_complete"))
        .stdout(predicate::str::contains("Final: hidden"));
}

#[test]
fn test_simulate_json() {
    let output = slidekit()
        .args([
            "simulate", "--show-at", "0", "--hide-at", "1", "--fps", "4", "--duration", "3",
            "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lifecycles: Vec<&str> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["lifecycle"].as_str().unwrap())
        .collect();
    assert_eq!(
        lifecycles,
        vec!["show_start", "show_complete", "hide_start", "hide_complete"]
    );
    assert_eq!(json["final_state"], "hidden");
    assert!(json["samples"].as_array().unwrap().is_empty());
}

#[test]
fn test_simulate_message() {
    slidekit()
        .args(["simulate", "--show-at", "0", "--message", "Saved", "--duration", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message: Saved"));
}

#[test]
fn test_simulate_quiet() {
    slidekit()
        .args(["-q", "simulate", "--show-at", "0", "--duration", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Final: shown"));
}

#[test]
fn test_simulate_rejects_zero_fps() {
    slidekit()
        .args(["simulate", "--fps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fps must be greater than zero"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_default_passes() {
    slidekit()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict: PASS (4/4 events"));
}

#[test]
fn test_check_every_direction_and_instant() {
    for direction in ["from-top", "from-bottom", "from-left", "from-right"] {
        slidekit()
            .args(["check", "--direction", direction, "--animation-duration", "0"])
            .assert()
            .success();
    }
}

#[test]
fn test_check_json_report() {
    let output = slidekit()
        .args(["check", "--on-screen-duration", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["verdict"], "pass");
    assert_eq!(json["total_events"], 2);
}

#[test]
fn test_check_show_on_activate_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("toast.yaml");
    fs::write(&path, "show_on_activate: true\nanimation_duration: 0.2\n").unwrap();

    slidekit()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_check_rejects_negative_tolerance() {
    slidekit()
        .args(["check", "--tolerance-ms", "-1"])
        .assert()
        .failure();
}
