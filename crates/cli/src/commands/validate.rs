// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validate command implementation.

use qk_core::{validate_query, ValidationResult};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::read_query;

/// Run the validate command. An invalid query is reported on stdout and
/// then returned as an error so the process exits non-zero.
pub fn run(query: Option<String>, output: OutputFormat) -> Result<()> {
    let query = read_query(query)?;
    let result = validate_query(&query);
    println!("{}", render(&result, output)?);
    check(&result)
}

pub(crate) fn render(result: &ValidationResult, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(match result {
            ValidationResult::Valid => "valid".to_string(),
            ValidationResult::Invalid { errors } => errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }),
    }
}

pub(crate) fn check(result: &ValidationResult) -> Result<()> {
    match result {
        ValidationResult::Valid => Ok(()),
        ValidationResult::Invalid { errors } => Err(Error::InvalidQuery {
            count: errors.len(),
        }),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
