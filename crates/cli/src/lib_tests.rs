// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Tests for the public `run()` function.
//!
//! Commands that print are covered by the integration tests; these check
//! the routing of results and errors.

use crate::{run, BuildArgs, Command, Error, OutputFormat};
use std::fs;
use tempfile::TempDir;

#[test]
fn run_validate_valid_query() {
    let result = run(Command::Validate {
        query: Some("Age >= 21".into()),
        output: OutputFormat::Text,
    });
    assert!(result.is_ok());
}

#[test]
fn run_validate_invalid_query_is_error() {
    let result = run(Command::Validate {
        query: Some("Age >= 21 &&".into()),
        output: OutputFormat::Json,
    });
    assert!(matches!(result, Err(Error::InvalidQuery { count: 1 })));
}

#[test]
fn run_tokens_rejects_blank_query() {
    let result = run(Command::Tokens {
        query: Some(" ".into()),
        output: OutputFormat::Text,
    });
    assert!(matches!(result, Err(Error::MissingQuery)));
}

#[test]
fn run_build_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter.json");
    fs::write(
        &path,
        r#"{"tokens":[{"type":"condition","property":"A","operator":"==","value":1}]}"#,
    )
    .unwrap();

    let result = run(Command::Build {
        file: path,
        format: None,
        encode_uri: false,
        filter_prefix: false,
        check: true,
        output: OutputFormat::Text,
    });
    assert!(result.is_ok());
}

#[test]
fn run_build_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let args = BuildArgs {
        file: dir.path().join("missing.toml"),
        ..BuildArgs::default()
    };
    let result = crate::commands::build::run(args);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn run_reference_commands() {
    assert!(run(Command::Operators {
        output: OutputFormat::Json
    })
    .is_ok());
    assert!(run(Command::Schema).is_ok());
}
