// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn qk() -> Command {
    let mut cmd = cargo_bin_cmd!("qk");
    cmd.env("NO_COLOR", "1").env_remove("QK_LOG");
    cmd
}

/// Helper to write a filter file into a temp directory and return its path
pub fn write_filter(temp: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Helper to parse JSON printed on stdout
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
