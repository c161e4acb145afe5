// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and listings.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and annotations: medium grey
    pub const CONTEXT: u8 = 245;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples block for `after_help`.
///
/// ```text
/// Examples:
///   qk validate "Age == 30"    Validate a query
/// ```
///
/// Lines ending in `:` become headers. In example lines the command (the
/// text before a run of two or more spaces) is colored as a literal, with
/// quoted arguments and `<placeholders>` as context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                format!("{indent}{}", header(trimmed))
            } else if let Some(end) = description_start(trimmed) {
                let (command, description) = trimmed.split_at(end);
                format!("{indent}{}{description}", colorize_command(command))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize one command line word by word.
pub fn colorize_command(command: &str) -> String {
    split_words(command)
        .into_iter()
        .map(|word| {
            if word.trim().is_empty() {
                word.to_string()
            } else if word.starts_with('"') || word.starts_with('<') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect()
}

/// Split on spaces, keeping `"..."` and `<...>` groups whole and the spaces
/// as separate items.
fn split_words(command: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut closer: Option<char> = None;

    for (i, c) in command.char_indices() {
        match closer {
            Some(end) if c == end => closer = None,
            Some(_) => {}
            None if c == '"' => closer = Some('"'),
            None if c == '<' => closer = Some('>'),
            None if c == ' ' => {
                if i > start {
                    words.push(&command[start..i]);
                }
                words.push(&command[i..i + 1]);
                start = i + 1;
            }
            None => {}
        }
    }
    if start < command.len() {
        words.push(&command[start..]);
    }
    words
}

/// Byte offset where the description starts: the first run of two or more
/// spaces after the command.
pub fn description_start(line: &str) -> Option<usize> {
    line.find("  ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
