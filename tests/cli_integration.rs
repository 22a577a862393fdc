//! Integration tests for the `tweak-urgency` binary.
//!
//! Each test points HOME at a temp directory, runs the binary as a
//! subprocess, and checks the exit code, stderr and the override file.
//! Only the paths that end before the interactive session are covered
//! here; the session itself is exercised through the library.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Create `~/.taskrc.d` with a settings file whose discovery command
/// doesn't exist, so no real task installation is consulted.
fn create_config_dir(home: &Path) -> PathBuf {
    let dir = home.join(".taskrc.d");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("tweak-urgency.toml"),
        "[discovery]\ncommand = [\"tweak-urgency-test-no-such-command\"]\n",
    )
    .unwrap();
    dir
}

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tweak-urgency"))
        .args(args)
        .env("HOME", home)
        .env_remove("TWEAK_URGENCY_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn missing_base_exits_with_diagnostic() {
    let home = TempDir::new().unwrap();
    let dir = create_config_dir(home.path());

    let output = run(home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("missing base file"), "stderr: {}", err);
    assert!(err.contains("urgency.base.rc"), "stderr: {}", err);
    assert_eq!(err.lines().count(), 1);
    assert!(!dir.join("urgency.rc").exists());
}

#[test]
fn missing_config_dir_exits_without_creating_it() {
    let home = TempDir::new().unwrap();

    let output = run(home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing base file"));
    assert!(!home.path().join(".taskrc.d").exists());
}

#[test]
fn unmatched_category_exits_with_diagnostic() {
    let home = TempDir::new().unwrap();
    let dir = create_config_dir(home.path());
    fs::write(
        dir.join("urgency.base.rc"),
        "urgency.project.coefficient=1\nurgency.tags.coefficient=1\n",
    )
    .unwrap();
    fs::write(dir.join("urgency.rc"), "urgency.tags.coefficient=4\n").unwrap();

    let output = run(home.path(), &["nosuchcategory"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim(), "error: no matching urgency coefficients");
    assert!(output.stdout.is_empty());
    // Override layer untouched
    assert_eq!(
        fs::read_to_string(dir.join("urgency.rc")).unwrap(),
        "urgency.tags.coefficient=4\n"
    );
}

#[test]
fn empty_base_exits_with_diagnostic() {
    let home = TempDir::new().unwrap();
    let dir = create_config_dir(home.path());
    fs::write(dir.join("urgency.base.rc"), "# nothing here\n").unwrap();

    let output = run(home.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no matching urgency coefficients"));
    assert!(!dir.join("urgency.rc").exists());
}

#[test]
fn malformed_settings_are_reported_but_not_fatal() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".taskrc.d");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("tweak-urgency.toml"), "[ui\n").unwrap();
    fs::write(dir.join("urgency.base.rc"), "urgency.project.coefficient=1\n").unwrap();

    // The default discovery command may or may not exist here; the category
    // filter excludes anything it finds either way.
    let output = run(home.path(), &["nosuchcategory"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("could not parse"), "stderr: {}", err);
    assert!(err.contains("no matching urgency coefficients"), "stderr: {}", err);
}

#[test]
fn help_lists_category_argument() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CATEGORY"), "stdout: {}", stdout);
}
