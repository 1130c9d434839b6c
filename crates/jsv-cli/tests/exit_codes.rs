//! Runs the `jsv` binary and checks exit codes and streams.

use std::path::{Path, PathBuf};
use std::process::Command;

fn jsv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsv"))
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_validate_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_file(dir.path(), "schema.json", r#"{"type": "integer", "minimum": 10}"#);
    let good = write_file(dir.path(), "good.json", "12");
    let bad = write_file(dir.path(), "bad.json", "3");
    let broken = write_file(dir.path(), "broken.json", "[");

    let status = |doc: &Path| {
        jsv()
            .arg("validate")
            .arg("--schema")
            .arg(&schema)
            .arg(doc)
            .output()
            .unwrap()
    };

    assert_eq!(status(&good).status.code(), Some(0));

    let output = status(&bad);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("#/minimum: Number 3 is smaller than minimum 10"), "{stdout}");

    let output = status(&broken);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("failed to parse"));
}

#[test]
fn test_lint_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_file(dir.path(), "clean.json", r#"{"type": "string"}"#);
    let dirty = write_file(dir.path(), "dirty.json", r#"{"type": "string", "maxLength": 1.5}"#);
    let missing = dir.path().join("missing.json");

    let code = |path: &Path| jsv().arg("lint").arg(path).status().unwrap().code();
    assert_eq!(code(&clean), Some(0));
    assert_eq!(code(&dirty), Some(1));
    assert_eq!(code(&missing), Some(2));
}

#[test]
fn test_json_format_and_root() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_file(dir.path(), "schema.json", r#"{"required": ["id"]}"#);
    let doc = write_file(dir.path(), "doc.json", "{}");
    let output = jsv()
        .args(["-v", "validate", "--format", "json", "--root", "$", "--schema"])
        .arg(&schema)
        .arg(&doc)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["errors"][0]["path"], "$/required");
    assert_eq!(report["errors"][0]["message"], "Missing required property: id");
}
