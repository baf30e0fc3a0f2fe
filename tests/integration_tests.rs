use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("docsnips")
}

#[test]
fn test_cli_shows_python_sample() {
    cmd()
        .args(["messages/get-events", "--language", "python"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("from knockapi import Knock"));
}

#[test]
fn test_cli_defaults_to_javascript() {
    cmd()
        .arg("objects/get")
        .assert()
        .success()
        .stdout(predicate::str::contains("@knocklabs/node"))
        .stdout(predicate::str::contains("knockClient.objects.get"));
}

#[test]
fn test_cli_list_operations() {
    cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("messages/get-events"))
        .stdout(predicate::str::contains("objects/get"))
        .stdout(predicate::str::contains("Get an object"));
}

#[test]
fn test_cli_list_languages() {
    cmd()
        .arg("--languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript"))
        .stdout(predicate::str::contains("csharp"))
        .stdout(predicate::str::contains("C#"));
}

#[test]
fn test_cli_rejects_unsupported_language() {
    // rust is not an authored language key
    cmd()
        .args(["objects/get", "--language", "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_unknown_operation_fails() {
    cmd()
        .arg("widgets/frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation"));
}

#[test]
fn test_cli_requires_an_action() {
    cmd().assert().failure();
}

#[test]
fn test_cli_export_json() {
    let output = cmd()
        .args(["--export", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let operations = value["operations"].as_array().unwrap();
    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0]["slug"], "messages/get-events");
}

#[test]
fn test_cli_export_yaml_by_default() {
    cmd()
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::contains("slug: objects/get"))
        .stdout(predicate::str::contains("language: elixir"));
}

#[test]
fn test_cli_export_to_file() {
    let path = std::env::temp_dir().join(format!("docsnips-export-{}.yaml", std::process::id()));

    cmd()
        .args(["--export", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote catalog to"));

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(written.contains("slug: messages/get-events"));
}

#[test]
fn test_cli_config_default_language() {
    let path = std::env::temp_dir().join(format!("docsnips-cfg-{}.toml", std::process::id()));
    std::fs::write(&path, "[docs]\ndefault_language = \"ruby\"\n").unwrap();

    cmd()
        .args(["objects/get", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Knock::Objects.get("));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_cli_save_config_round_trip() {
    let path = std::env::temp_dir().join(format!("docsnips-saved-{}.toml", std::process::id()));

    cmd()
        .args(["--save-config"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote config to"));

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(written.contains("default_language"));
}

#[test]
fn test_cli_color_emits_ansi() {
    cmd()
        .args(["objects/get", "--language", "python", "--color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("project-1"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docsnips"));
}
