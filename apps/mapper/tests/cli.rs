use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bitsmap(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bitsmap"));
    cmd.current_dir(dir).env_remove("RUST_LOG").env("BITSD__LOGGING__LEVEL", "warn");
    cmd
}

fn write(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    fs::write(&path, value.to_string()).unwrap();
    path.display().to_string()
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn maps_status_file() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "status.json",
        &json!({"value": "open", "modifiedby": "BITS", "timestamp": 1_380_000_000_000_i64}),
    );

    let output = bitsmap(dir.path()).args(["status", &input]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"status": "open", "from": {"name": "BITS"}, "when": 1_380_000_000_000_i64})
    );
}

#[test]
fn batch_output_is_reversed() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "batch.json",
        &json!([
            {"value": 20.0, "timestamp": 1000, "sensor": 1},
            {"value": 21.0, "timestamp": 2000, "sensor": 1},
            {"value": 22.0, "timestamp": 3000, "sensor": 2},
        ]),
    );

    let output = bitsmap(dir.path()).args(["batch", &input]).output().unwrap();

    assert!(output.status.success());
    let when: Vec<i64> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["when"].as_i64().unwrap())
        .collect();
    assert_eq!(when, [3000, 2000, 1000]);
}

#[test]
fn reads_stdin_when_input_is_dash() {
    let dir = TempDir::new().unwrap();
    let record = json!({"value": 22.5, "timestamp": 1000, "sensor": 3});

    let output = bitsmap(dir.path())
        .args(["temperature", "-"])
        .write_stdin(record.to_string())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["temperature"], json!(22.5));
    assert_eq!(stdout_json(&output)["sensor"], json!({"id": 3}));
}

#[test]
fn envelope_is_tagged_by_kind() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "envelope.json",
        &json!({"msg": {"value": "hello", "user": "alice", "timestamp": 5}}),
    );

    let output = bitsmap(dir.path()).args(["envelope", &input]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["kind"], json!("message"));
}

#[test]
fn unknown_status_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "status.json",
        &json!({"value": "ajar", "modifiedby": "BITS", "timestamp": 0}),
    );

    bitsmap(dir.path())
        .args(["status", &input])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown status code"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();

    bitsmap(dir.path())
        .args(["status", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn content_policy_from_environment() {
    let dir = TempDir::new().unwrap();
    let input =
        write(dir.path(), "message.json", &json!({"value": 42, "user": "bob", "timestamp": 1}));

    bitsmap(dir.path()).args(["message", &input]).assert().success();

    bitsmap(dir.path())
        .env("BITSD__MAPPING__CONTENT_POLICY", "require-text")
        .args(["message", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value"));
}

#[test]
fn content_policy_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bitsmap.toml"), "[mapping]\ncontent_policy = \"require-text\"\n")
        .unwrap();
    let input =
        write(dir.path(), "message.json", &json!({"value": 42, "user": "bob", "timestamp": 1}));

    bitsmap(dir.path()).args(["message", &input]).assert().failure();

    let output = bitsmap(dir.path())
        .args(["--content-policy", "coerce-to-text", "message", &input])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["content"], json!("42"));
}

#[test]
fn explicit_config_file_must_exist() {
    let dir = TempDir::new().unwrap();

    bitsmap(dir.path())
        .args(["--config", "missing.toml", "status", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
