//! Integration tests running the `check_estimation` binary

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_check_estimation"));
    command
        .env_remove("RUST_LOG")
        .env_remove("CHECK_ESTIMATION_ALPHA")
        .env_remove("CHECK_ESTIMATION_PROBABILITY")
        .env_remove("CHECK_ESTIMATION_CONFIG");
    command
}

fn write(dir: &Path, name: &str, contents: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path.to_string_lossy().into_owned())
}

fn run(args: &[&str]) -> anyhow::Result<Output> {
    Ok(binary().args(args).output()?)
}

#[test]
fn test_accept_exits_zero() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let sub = write(dir.path(), "team.out", "1.00\n1.00\n")?;
    let reference = write(dir.path(), "judge.ans", "0.90 1.10\n0.95 1.05\n")?;

    let output = run(&["judge.in", &sub, &reference])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Accepted: 2/2"));
    Ok(())
}

#[test]
fn test_statistical_reject_exits_zero() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let sub = write(dir.path(), "team.out", &"-1\n".repeat(100))?;
    let reference = write(dir.path(), "judge.ans", &"0 100\n".repeat(100))?;

    let output = run(&["judge.in", &sub, &reference])?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Rejected: 0/100"));
    assert!(!stdout.contains("line "));
    Ok(())
}

#[test]
fn test_truncated_submission() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let sub = write(dir.path(), "team.out", "1.0\n")?;
    let reference = write(dir.path(), "judge.ans", "0 2\n0 2\n")?;

    let output = run(&["judge.in", &sub, &reference])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("line 2: submission ended before reference."));
    assert!(stdout.contains("Found 1 differences in 1 lines"));
    Ok(())
}

#[test]
fn test_submission_from_stdin() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let reference = write(dir.path(), "judge.ans", "0 1\n")?;

    let mut child = binary()
        .args(["judge.in", "-", &reference])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(b"0.5\n")?;
    }
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.starts_with("Accepted: 1/1"));
    Ok(())
}

#[test]
fn test_both_stdin_is_an_error() -> anyhow::Result<()> {
    let output = run(&["judge.in", "-", "-"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.starts_with("Error: Invalid input"));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let reference = write(dir.path(), "judge.ans", "0 1\n")?;
    let missing = dir.path().join("missing.out");

    let output = run(&["judge.in", &missing.to_string_lossy(), &reference])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("cannot open"));
    Ok(())
}

#[test]
fn test_invalid_alpha() -> anyhow::Result<()> {
    let output = run(&["--alpha=abc", "x", "a", "b"])?;
    assert_eq!(output.status.code(), Some(2));

    let output = run(&["--alpha=1.5", "x", "a", "b"])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_help_and_version() -> anyhow::Result<()> {
    let output = run(&["--help"])?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("--probability"));

    let output = run(&["--version"])?;
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_json_format_and_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let sub = write(dir.path(), "team.out", &format!("{}{}", "0.5\n".repeat(80), "1.5\n".repeat(20)))?;
    let reference = write(dir.path(), "judge.ans", &"0 1\n".repeat(100))?;
    let config = write(dir.path(), "check.toml", "probability = 0.8\nformat = \"json\"\n")?;

    let output = run(&["--config", &config, "judge.in", &sub, &reference])?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["judgment"], "accepted");
    assert_eq!(value["verdict"]["tally"]["cases"], 100);
    Ok(())
}
