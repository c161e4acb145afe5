// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

const ADULTS: &str = r#"
filter_prefix = true

[[tokens]]
type = "condition"
property = "Age"
operator = ">="
value = 21

[[tokens]]
type = "logical"
operator = "&&"

[[tokens]]
type = "array_condition"
property = "Status"
operator = "^^*"
values = ["open", "pending"]
"#;

const NAMES: &str = r##"{
  "tokens": [
    { "type": "paren", "value": "(" },
    { "type": "condition", "property": "Name", "operator": "_=", "value": "Jo" },
    { "type": "logical", "operator": "||" },
    { "type": "condition", "property": "Tags", "operator": "#>", "value": 2 },
    { "type": "paren", "value": ")" }
  ]
}"##;

const DANGLING_PAREN: &str = r#"
[[tokens]]
type = "paren"
value = "("

[[tokens]]
type = "condition"
property = "A"
operator = "=="
value = true
"#;

#[test]
fn build_toml_file() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "adults.toml", ADULTS);

    qk().arg("build")
        .arg(&path)
        .assert()
        .success()
        .stdout("Filters= Age >= 21 && Status ^^* [\"open\",\"pending\"]\n");
}

#[test]
fn build_json_file() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "names.json", NAMES);

    qk().arg("build")
        .arg(&path)
        .assert()
        .success()
        .stdout("(Name _= \"Jo\" || Tags #> 2 )\n");
}

#[test]
fn build_encode_uri_flag() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "names.json", NAMES);

    qk().arg("build")
        .arg(&path)
        .arg("--encode-uri")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("%28Name%20_%3D%20%22Jo%22"));
}

#[test]
fn build_from_stdin_with_format() {
    qk().args(["build", "-", "--format", "json", "--filter-prefix"])
        .write_stdin(NAMES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Filters= (Name"));
}

#[test]
fn build_check_passes_for_balanced_query() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "adults.toml", ADULTS);

    qk().arg("build")
        .arg(&path)
        .args(["--check", "--encode-uri"])
        .assert()
        .success();
}

#[test]
fn build_check_fails_for_unbalanced_query() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "open.toml", DANGLING_PAREN);

    qk().arg("build").arg(&path).assert().success();
    qk().arg("build")
        .arg(&path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("query is invalid (1 error)"));
}

#[test]
fn build_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "adults.toml", ADULTS);

    let output = qk()
        .arg("build")
        .arg(&path)
        .args(["-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(
        json["query"],
        "Filters= Age >= 21 && Status ^^* [\"open\",\"pending\"]"
    );
    assert_eq!(json["tokens"].as_array().unwrap().len(), 4);
}

#[test]
fn build_unknown_extension_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "filter.yaml", ADULTS);

    qk().arg("build")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported filter file format: 'yaml'"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn build_invalid_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_filter(&temp, "bad.toml", "tokens = 3");

    qk().arg("build")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter file"));
}

#[test]
fn build_missing_file_fails() {
    qk().args(["build", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: io error"));
}
