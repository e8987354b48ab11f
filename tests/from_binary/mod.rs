//! Integration tests running the actual crate binary: Test the full E2E path including the CLI.

use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_testgen-rs"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to execute binary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn single_test_goes_to_stdout() {
    let output = run_binary(&["--test_id", "0"]);

    assert_success(&output);
    let stdout = String::from_utf8(output.stdout).expect("binary output was not valid UTF-8");
    assert_eq!(stdout, "3\n3\n1\n2\n");
}

#[test]
fn stdout_is_identical_across_runs() {
    let first = run_binary(&["--test_id", "3"]);
    let second = run_binary(&["--test_id", "3"]);

    assert_success(&first);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 11);
}

#[test]
fn output_dir_receives_all_files() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_binary(&["--output_dir", dir.path().to_str().unwrap()]);

    assert_success(&output);
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 13);
    let first = std::fs::read_to_string(dir.path().join("input000.txt")).unwrap();
    assert_eq!(first, "3\n3\n1\n2\n");
}

#[test]
fn usage_errors_exit_before_generating() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path().to_str().unwrap();

    for args in [
        vec![],
        vec!["--test_id", "0", "--output_dir", dir],
        vec!["--test_id", "15"],
    ] {
        let output = run_binary(&args);
        assert_eq!(output.status.code(), Some(2), "args {args:?} should be a usage error");
        assert!(output.stdout.is_empty());
    }
    assert_eq!(std::fs::read_dir(dir).unwrap().count(), 0);
}

#[test]
fn test_id_beyond_the_suite_fails() {
    let output = run_binary(&["--test_id", "14"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "unexpected stderr: {stderr}");
}
