//! End-to-end tests for the datebook binary
//!
//! These tests run the built executable with commands on stdin or in a file
//! and check exactly what it prints.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn datebook() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_datebook"));
    // Keep tests independent of the developer's config and log settings.
    cmd.env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent-datebook-config")
        .env("HOME", "/nonexistent-datebook-home");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The process may exit before reading stdin, e.g. on a bad config.
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn full_session_over_stdin() {
    let input = "\
Add 0-1-2 event1
Add 1-2-3 event2
Find 0-1-2

Del 0-1-2
Print
Del 1-2-3 event2
Del 1-2-3 event2
";
    let output = run_with_stdin(datebook(), input);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "event1\nDeleted 1 events.\n0001-02-03 event2\nDeleted successfully\nEvent not found\n"
    );
}

#[test]
fn errors_are_printed_and_exit_is_clean() {
    let input = "Blah\nFind 2017-13-01\nAdd 2017-1-32 x\nAdd 2017-1 x\nPrint\n";
    let output = run_with_stdin(datebook(), input);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Unknown command: Blah\n\
         Month value is invalid: 13\n\
         Day value is invalid: 32\n\
         Wrong date format: 2017-1\n"
    );
}

#[test]
fn logs_stay_off_stdout() {
    let mut cmd = datebook();
    cmd.arg("-vv");
    let output = run_with_stdin(cmd, "Add 2017-11-18 train\nPrint\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2017-11-18 train\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn reads_commands_from_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let commands = dir.path().join("commands.txt");
    std::fs::write(&commands, "Add 2017-11-18 train\nAdd 2017-11-18 train\nPrint\n").unwrap();

    let mut cmd = datebook();
    cmd.arg(&commands);
    let output = run_with_stdin(cmd, "");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2017-11-18 train\n");
}

#[test]
fn config_file_can_name_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let commands = dir.path().join("commands.txt");
    std::fs::write(&commands, "Del 2017-01-01\n").unwrap();
    let config = dir.path().join("config.toml");
    write_config(&config, &commands);

    let mut cmd = datebook();
    cmd.arg("--config").arg(&config);
    let output = run_with_stdin(cmd, "Print\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Deleted 0 events.\n");
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = datebook();
    cmd.arg("/nonexistent/datebook/commands.txt");
    let output = run_with_stdin(cmd, "");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_explicit_config_fails() {
    let mut cmd = datebook();
    cmd.args(["--config", "/nonexistent/datebook/config.toml"]);
    let output = run_with_stdin(cmd, "Print\n");

    assert!(!output.status.success());
}

fn write_config(path: &Path, input: &Path) {
    let contents = format!("log_filter = \"off\"\ninput = {:?}\n", input.display().to_string());
    std::fs::write(path, contents).unwrap();
}
