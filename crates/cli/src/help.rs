// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text and clap styling.

use crate::colors;
use anstyle::{Ansi256Color, Color, Style};
use clap::builder::styling::Styles;

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// clap styles matching the color codes in [`colors::codes`].
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template: commands are listed before options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header_text("Options:")
    )
}

/// Commands list shown in main help.
pub fn commands() -> String {
    let queries = [
        ("validate", "Check a query's structure"),
        ("tokens", "Show how a query is lexed"),
        ("build", "Build a query from a filter file"),
    ];
    let reference = [
        ("operators", "List operator literals"),
        ("schema", "Output JSON Schema for filter files"),
        ("completions", "Generate shell completions"),
    ];

    let mut out = header_text("Queries:");
    for (name, about) in queries {
        out.push_str(&entry(name, about));
    }
    out.push_str("\n\n");
    out.push_str(&header_text("Reference:"));
    for (name, about) in reference {
        out.push_str(&entry(name, about));
    }
    out.push('\n');
    out
}

fn entry(name: &str, about: &str) -> String {
    format!("\n  {}  {about}", literal_text(&format!("{name:<11}")))
}

/// Quickstart shown after main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Examples:
  qk validate \"Age >= 21 && Active == true\"    Validate a query
  qk build filter.toml --check                 Build and validate a stored filter
  qk operators -o json                         Dump the operator catalog",
    )
}

fn header_text(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn literal_text(text: &str) -> String {
    if colors::should_colorize() {
        colors::literal(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
