// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of filter files read by `qk build`.

use crate::config::FilterFile;
use crate::error::Result;
use schemars::schema_for;

/// Run the schema command.
pub fn run() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

pub(crate) fn render() -> Result<String> {
    let schema = schema_for!(FilterFile);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
