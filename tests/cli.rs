#![allow(deprecated)]
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn jarray_check() -> Command {
  let mut cmd = Command::cargo_bin("jarray-check").unwrap();
  cmd.env_remove("JARRAY_CHECK_FILE");
  cmd
}

#[test]
fn valid_file_exits_zero() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("stoptimes.json");
  fs::write(&path, "[\n{\"a\":1},\n{\"b\":2}\n]\n").unwrap();

  jarray_check()
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("🔍 Validating file:"))
    .stdout(predicate::str::contains("✅ Valid JSON file. 2 objects read successfully."));
}

#[test]
fn element_violation_exits_one() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("bad.json");
  fs::write(&path, r#"[{"a":1}, "oops", {"b":2}]"#).unwrap();

  jarray_check()
    .arg(&path)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("❌ Element 1 is not a valid JSON object."))
    .stdout(predicate::str::contains("✅").not());
}

#[test]
fn missing_file_exits_one() {
  let dir = tempdir().unwrap();

  jarray_check()
    .arg(dir.path().join("nope.json"))
    .assert()
    .code(1)
    .stdout(predicate::str::contains("❌ File does not exist."));
}

#[test]
fn closing_bracket() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("cut.json");
  fs::write(&path, r#"[{"a":1}"#).unwrap();

  jarray_check()
    .arg(&path)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("❌ File does not end with ']' (expected end of JSON array)."));
}

#[test]
fn path_from_env() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("env.json");
  fs::write(&path, "[]").unwrap();

  jarray_check()
    .env("JARRAY_CHECK_FILE", &path)
    .assert()
    .success()
    .stdout(predicate::str::contains("No path provided").not())
    .stdout(predicate::str::contains("0 objects read successfully."));
}

#[test]
fn default_path_is_announced() {
  // nothing is exported next to the test binary, so this is a not-found
  jarray_check()
    .assert()
    .code(1)
    .stdout(predicate::str::contains("ℹ️ No path provided, using default:"))
    .stdout(predicate::str::contains("stoptimes.json"))
    .stdout(predicate::str::contains("❌ File does not exist."));
}

#[test]
fn json_report() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("parse.json");
  fs::write(&path, r#"[{"a":1}, {"b" 2}]"#).unwrap();

  let output = jarray_check()
    .args(["--format", "json"])
    .arg(&path)
    .output()
    .unwrap();
  assert_eq!(output.status.code(), Some(1));

  let report : Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["valid"], false);
  assert_eq!(report["kind"], "parse_or_io");
  assert!(report["detail"].as_str().unwrap().contains("$[1]"));
}

#[test]
fn json_report_success() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("ok.json");
  fs::write(&path, r#"[{}, {}, {}]"#).unwrap();

  let output = jarray_check().args(["-f", "json"]).arg(&path).output().unwrap();
  assert!(output.status.success());
  let report : Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["valid"], true);
  assert_eq!(report["count"], 3);
}

#[test]
fn too_many_args_is_usage_error() {
  jarray_check().args(["a.json", "b.json"]).assert().code(2);
}
