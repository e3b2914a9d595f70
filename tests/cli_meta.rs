use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const LIGHT: &str = r#"{
  "profile": "light",
  "name": "core.router.network.c",
  "identifier": "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
  "version": "1.0.0"
}"#;

const FULL_WITHOUT_DATE_MODIFIED: &str = r#"{
  "profile": "full",
  "name": "logic.agent.analysis.py",
  "identifier": "https://example.org/resources/analysis",
  "version": "2.1.0-beta.1",
  "schema:type": "SoftwareSourceCode",
  "conformsTo": ["https://example.org/standards/metadata/v1.1"],
  "encodingFormat": "text/x-python",
  "dateCreated": "2024-01-15T10:00:00Z"
}"#;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_nomen")
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(dir)
        .env_remove("NOMEN_SCHEMA")
        .env_remove("NOMEN_REGISTRY_OUT")
        .env_remove("NOMEN_COLOR")
        .env("LC_ALL", "C")
        .args(args)
        .output()
        .unwrap()
}

fn events(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn write_schema(dir: &Path, light: &[&str], full_extra: &[&str]) -> String {
    let full: Vec<&str> = light
        .iter()
        .copied()
        .chain([
            "schema:type",
            "conformsTo",
            "encodingFormat",
            "dateCreated",
            "dateModified",
        ])
        .chain(full_extra.iter().copied())
        .collect();
    let schema = serde_json::json!({
        "version": "1.2",
        "description": "project schema",
        "profiles": {
            "light": { "required": light },
            "full": { "required": full },
        }
    });
    let path = dir.join("custom.schema.json");
    fs::write(&path, schema.to_string()).unwrap();
    path.to_string_lossy().into_owned()
}

fn install_default_schema(dir: &Path) {
    let standards = dir.join("standards");
    fs::create_dir_all(&standards).unwrap();
    let written = write_schema(dir, &["name", "identifier", "version"], &[]);
    fs::rename(written, standards.join("metadata-sidecar.v1.1.schema.json")).unwrap();
}

#[test]
fn test_meta_valid_light_document() {
    let dir = tempdir().unwrap();
    install_default_schema(dir.path());
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();

    let output = run(dir.path(), &["meta", "a.meta.json", "--color", "never"]);
    assert!(
        output.status.success(),
        "stdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[OK] a.meta.json"), "got:\n{}", stdout);
}

#[test]
fn test_meta_full_missing_date_modified_fails() {
    let dir = tempdir().unwrap();
    install_default_schema(dir.path());
    fs::write(dir.path().join("good.meta.json"), LIGHT).unwrap();
    fs::write(dir.path().join("bad.meta.json"), FULL_WITHOUT_DATE_MODIFIED).unwrap();

    let output = run(
        dir.path(),
        &["meta", "--json", "good.meta.json", "bad.meta.json"],
    );
    assert_eq!(output.status.code(), Some(1));

    let events = events(&output);
    let bad = events
        .iter()
        .find(|e| e["event"] == "verdict" && e["path"] == "bad.meta.json")
        .unwrap();
    assert_eq!(bad["outcome"], "invalid");
    assert_eq!(bad["reasons"], serde_json::json!(["missing_required_field:dateModified"]));

    let complete = events.last().unwrap();
    assert_eq!(complete["valid"], 1);
    assert_eq!(complete["invalid"], 1);
}

#[test]
fn test_meta_reports_every_defect_in_one_document() {
    let dir = tempdir().unwrap();
    install_default_schema(dir.path());
    fs::write(
        dir.path().join("x.meta.json"),
        r#"{"profile": "light", "name": "x", "identifier": "not a uri", "version": "01.0"}"#,
    )
    .unwrap();

    let output = run(dir.path(), &["meta", "--json", "x.meta.json"]);
    assert_eq!(output.status.code(), Some(1));
    let events = events(&output);
    let verdict = events.iter().find(|e| e["event"] == "verdict").unwrap();
    let reasons: Vec<&str> = verdict["reasons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap())
        .collect();
    assert_eq!(reasons, vec!["invalid_uri:identifier", "invalid_semver:01.0"]);
}

#[test]
fn test_meta_unreadable_file_is_structural_error() {
    let dir = tempdir().unwrap();
    install_default_schema(dir.path());

    let output = run(dir.path(), &["meta", "--json", "missing.meta.json"]);
    assert_eq!(output.status.code(), Some(1));
    let events = events(&output);
    let error = events.iter().find(|e| e["event"] == "error").unwrap();
    assert_eq!(error["kind"], "unreadable");
    assert_eq!(error["path"], "missing.meta.json");
}

#[test]
fn test_meta_explicit_schema_must_exist() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();

    let output = run(
        dir.path(),
        &["meta", "a.meta.json", "--schema", "nope.schema.json"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schema file not found"), "got:\n{}", stderr);
}

#[test]
fn test_meta_schema_can_add_required_fields() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();
    let schema = write_schema(dir.path(), &["name", "identifier", "version", "license"], &[]);

    let output = run(
        dir.path(),
        &["meta", "--json", "a.meta.json", "--schema", &schema],
    );
    assert_eq!(output.status.code(), Some(1));
    let events = events(&output);
    let verdict = events.iter().find(|e| e["event"] == "verdict").unwrap();
    assert_eq!(verdict["reasons"][0], "missing_required_field:license");
}

#[test]
fn test_meta_schema_from_project_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();
    write_schema(dir.path(), &["name", "identifier", "version", "creator"], &[]);
    fs::write(
        dir.path().join("nomen.toml"),
        "[meta]\nschema = \"custom.schema.json\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["meta", "a.meta.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_meta_schema_cannot_drop_builtin_fields() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();
    let schema = write_schema(dir.path(), &["name", "version"], &[]);

    let output = run(dir.path(), &["meta", "a.meta.json", "--schema", &schema]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("identifier"), "got:\n{}", stderr);
}

#[test]
fn test_meta_missing_default_schema_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();
    assert!(!dir.path().join("standards").exists());

    let output = run(dir.path(), &["meta", "--json", "a.meta.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("standards/metadata-sidecar.v1.1.schema.json"),
        "got:\n{}",
        stderr
    );
    assert!(stderr.contains("schema file not found"), "got:\n{}", stderr);
}

#[test]
fn test_meta_default_schema_location_is_used_when_present() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.meta.json"), LIGHT).unwrap();
    install_default_schema(dir.path());

    let output = run(dir.path(), &["meta", "a.meta.json"]);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_meta_requires_at_least_one_file() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["meta"]);
    assert_eq!(output.status.code(), Some(2));
}
