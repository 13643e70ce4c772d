//! Integration tests for external rule tables

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VELAR_RULES: &str = r#"
[metadata]
code = "velar"
name = "Velar CH everywhere"
extends = "nhg"

[[productions]]
pattern = "CH"
output = "x"
consumes = 1
"#;

/// Test generating a rule table template
#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("bairisch.toml");

    let mut cmd = Command::cargo_bin("narmer").unwrap();
    cmd.args([
        "generate-config",
        "--code",
        "bairisch",
        "--output",
        output_path.to_str().unwrap(),
        "--extends",
        "enhg",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Rule table template generated successfully",
    ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("code = \"bairisch\""));
    assert!(content.contains("extends = \"enhg\""));
    assert!(content.contains("[[productions]]"));
}

/// Generated templates validate and transcribe
#[test]
fn test_generated_template_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("template.toml");

    Command::cargo_bin("narmer")
        .unwrap()
        .args(["generate-config", "-c", "tpl", "-o", rules_path.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("narmer")
        .unwrap()
        .args(["validate", "-r", rules_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule table is valid"))
        .stdout(predicate::str::contains("Code: tpl"));

    Command::cargo_bin("narmer")
        .unwrap()
        .args(["transcribe", "-r", rules_path.to_str().unwrap(), "Buch", "ich"])
        .assert()
        .success()
        .stdout("Buch\tbux\nich\tiç\n");
}

/// Test validating a valid rule table
#[test]
fn test_validate_valid_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("velar.toml");
    fs::write(&rules_path, VELAR_RULES).unwrap();

    Command::cargo_bin("narmer")
        .unwrap()
        .args(["validate", "--rules", rules_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule table is valid"))
        .stdout(predicate::str::contains("Name: Velar CH everywhere"))
        .stdout(predicate::str::contains("Unreachable productions: 4"));
}

/// Test validating an invalid rule table
#[test]
fn test_validate_invalid_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("invalid.toml");
    fs::write(
        &rules_path,
        r#"
[metadata]
code = "broken"
name = "Broken"

[[productions]]
pattern = "CH"
output = "x"
consumes = 2
"#,
    )
    .unwrap();

    Command::cargo_bin("narmer")
        .unwrap()
        .args(["validate", "-r", rules_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rule table is invalid"));
}

/// External table overrides the extended stage
#[test]
fn test_transcribe_with_external_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("velar.toml");
    fs::write(&rules_path, VELAR_RULES).unwrap();

    Command::cargo_bin("narmer")
        .unwrap()
        .args([
            "transcribe",
            "-r",
            rules_path.to_str().unwrap(),
            "-f",
            "json",
            "ich",
            "Wasser",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ipa\": \"ix\""))
        .stdout(predicate::str::contains("\"ipa\": \"vaser\""))
        .stdout(predicate::str::contains("\"stage\": \"velar\""));
}

/// Missing rule table file
#[test]
fn test_missing_rules_file() {
    Command::cargo_bin("narmer")
        .unwrap()
        .args(["transcribe", "-r", "nonexistent.toml", "Hund"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load rule table"));
}
