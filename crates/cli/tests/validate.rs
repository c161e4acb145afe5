// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use yare::parameterized;

// ─── validate ───

#[parameterized(
    simple = { "Age == 30" },
    grouped = { "(A == 1 || B == 2) && C != 3" },
    prefixed = { "Filters= Name @= \"ann\"" },
    list = { "Status ^^* [\"open\",\"closed\"]" },
    empty = { "Filters=" },
)]
fn validate_accepts(query: &str) {
    qk().args(["validate", query])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn validate_reports_errors_and_fails() {
    qk().args(["validate", "(A == 1 ||"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Query ends with a logical operator"))
        .stdout(predicate::str::contains("Unmatched opening parenthesis"))
        .stderr(predicate::str::contains("error: query is invalid (2 errors)"));
}

#[test]
fn validate_reports_expected_condition() {
    qk().args(["validate", "&& A == 1"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "Expected condition at token 1, found \"&&\"",
        ));
}

#[test]
fn validate_reads_stdin() {
    qk().arg("validate")
        .write_stdin("A == 1 && B == 2\n")
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn validate_without_query_fails() {
    qk().arg("validate")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no query given"));
}

#[test]
fn validate_json_output() {
    let output = qk()
        .args(["validate", "A == 1 )", "-o", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["errors"][0],
        "Unmatched closing parenthesis at token 4"
    );
}

// ─── tokens ───

#[test]
fn tokens_lists_lexemes() {
    qk().args(["tokens", "Filters= Id ^^ [1,2]"])
        .assert()
        .success()
        .stdout("  1  word  Id\n  2  word  ^^\n  3  word  [1,2]\n");
}

#[test]
fn tokens_json_output() {
    let output = qk()
        .args(["tokens", "\"a b\" || x", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json[0]["kind"], "quoted");
    assert_eq!(json[1]["kind"], "or");
    assert_eq!(json[2]["span"]["start"], 9);
}

// ─── reference ───

#[test]
fn operators_lists_catalog() {
    qk().arg("operators")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core:"))
        .stdout(predicate::str::contains("#>=    CountGreaterThanOrEqual"));
}

#[test]
fn schema_describes_filter_files() {
    let output = qk().arg("schema").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["title"], "FilterFile");
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completions_generate(shell: &str) {
    qk().args(["completions", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("qk"));
}

#[test]
fn help_lists_commands() {
    qk().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Queries:"))
        .stdout(predicate::str::contains("validate"));
}
