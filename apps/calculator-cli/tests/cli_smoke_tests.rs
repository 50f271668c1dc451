#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the calculator binary
//!
//! These tests verify that the CLI commands work correctly, including
//! arithmetic output, division-by-zero reporting and configuration handling.

use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Helper to run the calculator binary with given arguments
fn run_calculator(args: &[&str]) -> std::process::Output {
    run_calculator_with_env(args, &[])
}

/// Helper to run the calculator binary with extra environment variables
fn run_calculator_with_env(args: &[&str], envs: &[(&str, &str)]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator"))
        .args(args)
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    for command in ["add", "subtract", "multiply", "divide", "eval", "check"] {
        assert!(stdout.contains(command), "Should list '{command}' subcommand");
    }
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    assert!(stdout_of(&output).starts_with("calculator"));
}

#[test]
fn test_cli_arithmetic_commands() {
    assert_eq!(stdout_of(&run_calculator(&["add", "2", "3"])), "5");
    assert_eq!(stdout_of(&run_calculator(&["subtract", "5", "3"])), "2");
    assert_eq!(stdout_of(&run_calculator(&["sub", "3", "5"])), "-2");
    assert_eq!(stdout_of(&run_calculator(&["multiply", "4", "5"])), "20");
    assert_eq!(stdout_of(&run_calculator(&["mul", "-2", "3"])), "-6");
    assert_eq!(stdout_of(&run_calculator(&["divide", "5", "2"])), "2.5");
    assert_eq!(stdout_of(&run_calculator(&["div", "10", "2"])), "5");
}

#[test]
fn test_cli_negative_operands() {
    let output = run_calculator(&["add", "-1", "-1"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-2");
}

#[test]
fn test_cli_eval_command() {
    assert_eq!(stdout_of(&run_calculator(&["eval", "+", "2", "3"])), "5");
    assert_eq!(stdout_of(&run_calculator(&["eval", "/", "6", "3"])), "2");
    assert_eq!(stdout_of(&run_calculator(&["eval", "multiply", "6", "3"])), "18");

    let output = run_calculator(&["eval", "pow", "2", "3"]);
    assert!(!output.status.success(), "Unknown operation should fail");
}

#[test]
fn test_cli_division_by_zero_fails() {
    let output = run_calculator(&["divide", "5", "0"]);

    assert!(
        !output.status.success(),
        "Division by zero should exit with an error"
    );
    assert!(output.stdout.is_empty(), "No result should be printed");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("division by zero"),
        "Should report division by zero, got: {stderr}"
    );
}

#[test]
fn test_cli_precision_flag() {
    let output = run_calculator(&["--precision", "3", "divide", "10", "4"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2.500");
}

#[test]
fn test_cli_json_output() {
    let output = run_calculator(&["--json", "divide", "5", "2"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "operation": "divide", "a": 5, "b": 2, "value": 2.5 })
    );
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("calculator.yaml");

    std::fs::write(
        &config_path,
        r"
logging:
  level: error
output:
  precision: 1
",
    )
    .expect("Failed to write config file");

    let output = run_calculator(&["--config", config_path.to_str().unwrap(), "div", "7", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3.5");

    let output = run_calculator(&["--config", config_path.to_str().unwrap(), "div", "9", "3"]);
    assert_eq!(stdout_of(&output), "3.0");
}

#[test]
fn test_cli_missing_config_file_fails() {
    let output = run_calculator(&["--config", "/nonexistent/calculator.yaml", "add", "1", "2"]);

    assert!(!output.status.success(), "Missing config should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}

#[test]
fn test_cli_env_overrides_config() {
    let output = run_calculator_with_env(
        &["multiply", "6", "7"],
        &[("CALCULATOR__OUTPUT__FORMAT", "json")],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["value"], 42);
    assert_eq!(value["operation"], "multiply");
}

#[test]
fn test_cli_check_command() {
    let output = run_calculator(&["check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("\"level\": \"warn\""));
}

#[test]
fn test_cli_print_config() {
    let output = run_calculator(&["--print-config", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["output"]["format"], "json");
}
