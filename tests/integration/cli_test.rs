//! Integration tests for the fcpx-markers binary

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fixtures_dir, temp_fixture};

fn fcpx_markers() -> Command {
    let mut cmd = Command::cargo_bin("fcpx-markers").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn prints_end_to_end_example() {
    fcpx_markers()
        .arg(fixtures_dir().join("intro_scene2.fcpxml"))
        .assert()
        .success()
        .stdout("00:00:00 Intro\n00:01:05 Scene2\n")
        .stderr("");
}

#[test]
fn snapshot_full_project_output() {
    let (temp_dir, path) = temp_fixture("chapters.fcpxml");
    let output = fcpx_markers().arg(&path).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    insta::assert_snapshot!(stdout.trim_end(), @r"
    00:00:00 Cold Open
    00:00:45 Guest Intro
    00:02:05 Interview
    00:07:15 Sponsor
    00:12:05 Rapid Fire
    00:27:05 Credits
    00:29:05 Outro
    ");

    drop(temp_dir);
}

#[test]
fn empty_project_prints_nothing() {
    fcpx_markers()
        .arg(fixtures_dir().join("no_markers.fcpxml"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn verbose_logging_stays_off_stdout() {
    fcpx_markers()
        .arg("-vv")
        .arg(fixtures_dir().join("intro_scene2.fcpxml"))
        .assert()
        .success()
        .stdout("00:00:00 Intro\n00:01:05 Scene2\n")
        .stderr(predicate::str::contains("Extracted markers"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_file_exits_1() {
    fcpx_markers()
        .arg("/nonexistent/project.fcpxml")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read /nonexistent/project.fcpxml"));
}

#[test]
fn malformed_xml_exits_1() {
    fcpx_markers()
        .arg(fixtures_dir().join("malformed.fcpxml"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not well-formed XML"));
}

#[test]
fn missing_marker_name_exits_1() {
    fcpx_markers()
        .arg(fixtures_dir().join("missing_name.fcpxml"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("has no name attribute"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    fcpx_markers()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn help_shows_usage() {
    fcpx_markers()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("<FILE>"));
}
