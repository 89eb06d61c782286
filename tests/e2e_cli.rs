//! CLI end-to-end tests
//!
//! Tests for the clipforge command-line interface. Anything needing a real
//! media file (and ffmpeg/ffprobe) is out of scope here; these exercise
//! argument handling, pre-flight checks, and exit codes.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn clipforge_cmd() -> Command {
    Command::cargo_bin("clipforge").unwrap()
}

#[test]
fn no_args_shows_help() {
    let mut cmd = clipforge_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    let mut cmd = clipforge_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipforge"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    let mut cmd = clipforge_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipforge"));
}

#[test]
fn version_subcommand() {
    let mut cmd = clipforge_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipforge"));
}

#[test]
fn split_help() {
    let mut cmd = clipforge_cmd();
    cmd.args(["split", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Split a media file"));
}

#[test]
fn probe_help() {
    let mut cmd = clipforge_cmd();
    cmd.args(["probe", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Probe a media file"));
}

#[test]
fn split_requires_max() {
    let mut cmd = clipforge_cmd();
    cmd.args(["split", "/tmp/whatever.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max"));
}

#[test]
fn split_nonexistent_input_fails() {
    let mut cmd = clipforge_cmd();
    cmd.args(["split", "/nonexistent/path/movie.mp4", "--max", "30m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exist"));
}

#[test]
fn probe_nonexistent_file_fails() {
    let mut cmd = clipforge_cmd();
    cmd.args(["probe", "/nonexistent/path/movie.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exist"));
}

#[test]
fn malformed_duration_fails_before_touching_anything() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("movie.mp4");
    fs::write(&input, b"not really media").unwrap();

    let mut cmd = clipforge_cmd();
    cmd.args(["split", input.to_str().unwrap(), "--max", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration"));

    // No output root appears for a run that never started.
    assert!(!temp.path().join("movie_split").exists());
}

#[test]
fn zero_duration_is_rejected() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("movie.mp4");
    fs::write(&input, b"not really media").unwrap();

    let mut cmd = clipforge_cmd();
    cmd.args(["split", input.to_str().unwrap(), "--max", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn check_tools_runs() {
    let mut cmd = clipforge_cmd();
    cmd.arg("check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffmpeg"))
        .stdout(predicate::str::contains("ffprobe"));
}

#[test]
fn validate_default_config() {
    let mut cmd = clipforge_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults"));
}

#[test]
fn validate_valid_config_file() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.json");
    fs::write(&config_file, r#"{"split": {"output_suffix": "_parts"}}"#).unwrap();

    let mut cmd = clipforge_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("_parts"));
}

#[test]
fn validate_invalid_config_file_fails() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.json");
    fs::write(&config_file, "not json at all").unwrap();

    let mut cmd = clipforge_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .failure();
}
