// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokens command implementation.
//!
//! Shows the lexemes the validator sees, one per line, numbered the same
//! way validation errors number them.

use qk_core::{lex, strip_filter_prefix, Lexeme};

use crate::cli::OutputFormat;
use crate::colors;
use crate::error::Result;

use super::read_query;

pub fn run(query: Option<String>, output: OutputFormat) -> Result<()> {
    let query = read_query(query)?;
    let lexemes = lex(strip_filter_prefix(query.trim()));
    println!("{}", render(&lexemes, output)?);
    Ok(())
}

pub(crate) fn render(lexemes: &[Lexeme<'_>], output: OutputFormat) -> Result<String> {
    if output == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(lexemes)?);
    }

    let width = lexemes
        .iter()
        .map(|l| l.kind.as_str().len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = lexemes
        .iter()
        .enumerate()
        .map(|(i, lexeme)| {
            let kind = format!("{:<width$}", lexeme.kind.as_str());
            let kind = if colors::should_colorize() {
                colors::context(&kind)
            } else {
                kind
            };
            format!("{:>3}  {kind}  {}", i + 1, lexeme.text)
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
