use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("boot_delay_ms = 2000"));
    assert!(contents.contains("# Release distance"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_generate_prints_defaults() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gesture_threshold = 100.0"))
        .stdout(predicate::str::contains("[ui]"));
}

#[test]
fn test_config_show_applies_file_and_overrides() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "boot_delay_ms = 500\n[ui]\nshow_side_panel = false\n",
    )
    .unwrap();

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "show", "--submit-delay-ms", "750"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boot_delay_ms = 500"))
        .stdout(predicate::str::contains("submit_delay_ms = 750"))
        .stdout(predicate::str::contains("show_side_panel = false"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "gesture_max_travel = 50.0\ngesture_threshold = 80.0\n",
    )
    .unwrap();

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gesture_threshold"));
}

#[test]
fn test_logs_written_under_home() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("neurallink")
        .env("NEURALLINK_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success();

    assert!(dir.path().join("logs").join("neurallink.log").exists());
}
