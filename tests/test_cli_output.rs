// ABOUTME: Runs the project-wizard binary and checks what lands on stdout
// Stdout must stay pipeable: printed results only, never terminal control sequences

use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_project-wizard"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run project-wizard")
}

#[test]
fn test_defaults_json_is_pipeable() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["defaults", "--format", "json", "--project-name", "Piped"]);

    assert!(output.status.success());
    assert!(!output.stdout.contains(&0x1b), "stdout carries escape sequences");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["defaults"]["project_name"], "Piped");
}

#[test]
fn test_defaults_writes_no_log_file() {
    let home = TempDir::new().unwrap();
    let output = run(&home, &["defaults"]);

    assert!(output.status.success());
    assert!(!home.path().join(".project-wizard").join("logs").exists());
}

#[test]
fn test_wizard_without_terminal_leaves_stdout_empty() {
    let home = TempDir::new().unwrap();
    // Captured stderr is a pipe, so the wizard refuses to start
    let output = run(&home, &["--format", "json"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No TTY detected"));
    assert!(!stderr.contains('\u{1b}'));
}
