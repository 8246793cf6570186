// brandguard/tests/cli_integration_tests.rs
//! Command-line integration tests for the `brandguard` binary.
//!
//! Each test spawns the real executable with `assert_cmd`, feeds content on stdin
//! and asserts on stdout, stderr and the exit code. Output is stripped of ANSI
//! escapes before comparison; `tempfile` provides config, input and output files.

use anyhow::Result;
use assert_cmd::Command;
#[allow(unused_imports)]
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

fn brandguard() -> Command {
    let mut cmd = Command::cargo_bin("brandguard").unwrap();
    cmd.env_remove("BRANDGUARD_CONFIG");
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn run_brandguard_command(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = brandguard();
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

fn strip_ansi(bytes: &[u8]) -> String {
    let cleaned = strip_ansi_escapes_fn(bytes);
    String::from_utf8_lossy(&cleaned).to_string()
}

fn northwind_config() -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
identity:
  company_name: Northwind
  email_domain: northwind.io
  local_phone: "(415) 200-3000"
  toll_free_phone: 1-800-600-7000
"#,
    )?;
    Ok(file)
}

#[test]
fn test_validate_compliant_content() {
    let assert = run_brandguard_command(
        "Contact Casurance at info@casurance.net or 1-888-254-0089.",
        &["validate"],
    )
    .success();
    let stdout = strip_ansi(&assert.get_output().stdout);
    assert!(stdout.contains("Content is brand-compliant."), "{}", stdout);
}

#[test]
fn test_validate_reports_violations_with_exit_code_one() {
    let assert = run_brandguard_command("Reach us at sales@otherbrand.com", &["validate"]).code(1);
    let stdout = strip_ansi(&assert.get_output().stdout);
    assert!(stdout.contains("Error: Invalid email addresses found: sales@otherbrand.com."));
    assert!(stdout.contains("Content is not brand-compliant (2 error(s))."));
}

#[test]
fn test_validate_json_output() -> Result<()> {
    let assert = run_brandguard_command(
        "To file a claim, photograph the damage.",
        &["validate", "--json"],
    )
    .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(json["isValid"], true);
    assert_eq!(json["warnings"][0], "Content does not mention Casurance");
    assert_eq!(json["errors"].as_array().map(|a| a.len()), Some(0));
    Ok(())
}

#[test]
fn test_sanitize_to_stdout() {
    run_brandguard_command("Call 213-555-1234 now\n", &["sanitize", "--no-summary"])
        .success()
        .stdout("Call 1-888-254-0089 now\n");
}

#[test]
fn test_sanitize_prints_repair_summary_to_stderr() {
    let assert = run_brandguard_command(
        "Cassurance support: help@casurance.com",
        &["sanitize"],
    )
    .success();
    let stdout = strip_ansi(&assert.get_output().stdout);
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert_eq!(stdout, "Casurance support: support@casurance.net\n");
    assert!(stderr.contains("Repair Summary:"), "{}", stderr);
    assert!(stderr.contains("company_name"));
    assert!(stderr.contains("help@casurance.com"));
}

#[test]
fn test_sanitize_diff_view() {
    let assert = run_brandguard_command(
        "Call 213-555-1234 now\n",
        &["sanitize", "--diff", "--no-summary"],
    )
    .success();
    let stdout = strip_ansi(&assert.get_output().stdout);
    assert!(stdout.contains("- Call 213-555-1234 now"), "{}", stdout);
    assert!(stdout.contains("+ Call 1-888-254-0089 now"));
}

#[test]
fn test_sanitize_to_output_file() -> Result<()> {
    let output = NamedTempFile::new()?;
    let path = output.path().to_string_lossy().to_string();
    run_brandguard_command(
        "Questions? news@otherbrand.com",
        &["sanitize", "--no-summary", "-o", &path],
    )
    .success()
    .stdout("");
    assert_eq!(fs::read_to_string(output.path())?, "Questions? press@casurance.net\n");
    Ok(())
}

#[test]
fn test_sanitize_warns_when_violations_remain() {
    let assert = run_brandguard_command("Lorem ipsum dolor sit amet.", &["sanitize", "--no-summary"]).success();
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("still has 1 brand violation(s)"), "{}", stderr);
}

#[test]
fn test_ensure_repairs_content() {
    run_brandguard_command("Reach us at sales@otherbrand.com\n", &["ensure"])
        .success()
        .stdout("Reach us at info@casurance.net\n");
}

#[test]
fn test_ensure_rejects_unrecoverable_content_with_exit_code_two() {
    let assert = run_brandguard_command("Lorem ipsum: call 555-1234 for a quote.", &["ensure"])
        .code(2)
        .stdout("");
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("must be regenerated"), "{}", stderr);
    assert!(stderr.contains("pattern 'lorem_ipsum'"));
    assert!(stderr.contains("pattern 'placeholder_local_number'"));
}

#[test]
fn test_ensure_document() -> Result<()> {
    let input = r#"{"kind":"blog_post","title":"Tips from Cassurance","body":"Email agent@gmail.com for a quote."}"#;
    let assert = run_brandguard_command(input, &["ensure", "--document"]).success();
    let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(doc["kind"], "blog_post");
    assert_eq!(doc["title"], "Tips from Casurance");
    assert_eq!(doc["body"], "Email info@casurance.net for a quote.");
    assert!(doc.get("subtitle").is_none());
    Ok(())
}

#[test]
fn test_ensure_document_names_the_failing_field() {
    let input = r#"{"kind":"page","title":"Casurance","excerpt":"[Phone Number]","body":"Casurance"}"#;
    let assert = run_brandguard_command(input, &["ensure", "--document"]).code(2);
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("Field 'excerpt'"), "{}", stderr);
}

#[test]
fn test_ensure_document_rejects_malformed_json() {
    run_brandguard_command("not json", &["ensure", "--document"])
        .code(1)
        .stderr(predicate::str::contains("not a valid generated-content JSON document"));
}

#[test]
fn test_custom_config_file() -> Result<()> {
    let config = northwind_config()?;
    let path = config.path().to_string_lossy().to_string();
    run_brandguard_command("Call 213-555-1234", &["--config", &path, "ensure"])
        .success()
        .stdout("Call 1-800-600-7000\n");
    Ok(())
}

#[test]
fn test_config_from_environment() -> Result<()> {
    let config = northwind_config()?;
    let mut cmd = brandguard();
    cmd.env("BRANDGUARD_CONFIG", config.path())
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("company_name: Northwind"))
        .stdout(predicate::str::contains("lorem_ipsum"));
    Ok(())
}

#[test]
fn test_show_config_defaults() {
    run_brandguard_command("", &["show-config"])
        .success()
        .stdout(predicate::str::contains("company_name: Casurance"))
        .stdout(predicate::str::contains("1-888-254-0089"));
}

#[test]
fn test_missing_config_fails() {
    run_brandguard_command("Casurance", &["--config", "no-such-brand-config-7f3a", "validate"])
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_input_file() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    write!(input, "Casurance: +1 (310) 555-0100 ext. 12")?;
    let path = input.path().to_string_lossy().to_string();
    run_brandguard_command("", &["ensure", "-i", &path])
        .success()
        .stdout("Casurance: 1-888-254-0089\n");
    Ok(())
}
