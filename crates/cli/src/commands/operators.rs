// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operators command implementation.

use qk_core::{Operator, OperatorFamily};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::colors;
use crate::error::Result;

/// One catalog entry in JSON output.
#[derive(Debug, Serialize)]
pub(crate) struct OperatorEntry {
    pub literal: &'static str,
    pub name: &'static str,
    pub family: OperatorFamily,
    pub pattern: bool,
    pub list: bool,
}

impl From<Operator> for OperatorEntry {
    fn from(op: Operator) -> Self {
        OperatorEntry {
            literal: op.as_str(),
            name: op.name(),
            family: op.family(),
            pattern: op.is_pattern(),
            list: op.is_list(),
        }
    }
}

pub fn run(output: OutputFormat) -> Result<()> {
    println!("{}", render(output)?);
    Ok(())
}

pub(crate) fn render(output: OutputFormat) -> Result<String> {
    if output == OutputFormat::Json {
        let entries: Vec<OperatorEntry> = Operator::ALL.into_iter().map(Into::into).collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let colorize = colors::should_colorize();
    let mut out = String::new();
    let mut current = None;
    for op in Operator::ALL {
        let family = op.family();
        if current != Some(family) {
            if current.is_some() {
                out.push('\n');
            }
            let heading = format!("{}:", family_heading(family));
            out.push_str(&if colorize { colors::header(&heading) } else { heading });
            out.push('\n');
            current = Some(family);
        }
        let literal = format!("{:<5}", op.as_str());
        let literal = if colorize { colors::literal(&literal) } else { literal };
        out.push_str(&format!("  {literal}  {}\n", op.name()));
    }
    Ok(out.trim_end().to_string())
}

fn family_heading(family: OperatorFamily) -> &'static str {
    match family {
        OperatorFamily::Core => "Core",
        OperatorFamily::CaseInsensitive => "Case-insensitive",
        OperatorFamily::Count => "Count",
    }
}

#[cfg(test)]
#[path = "operators_tests.rs"]
mod tests;
