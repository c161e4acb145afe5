// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query lexer.
//!
//! At each non-whitespace position the scanner tries, in order: a quoted
//! string, `(`, `)`, `&&`, `||`, and finally a bareword (a maximal run of
//! characters that are neither whitespace nor parentheses). A quote that is
//! never closed is lexed as the start of a bareword.

use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexemeKind {
    /// `"..."` with backslash escapes.
    Quoted,
    OpenParen,
    CloseParen,
    And,
    Or,
    /// Property names, operator literals, unquoted values.
    Word,
}

impl LexemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexemeKind::Quoted => "quoted",
            LexemeKind::OpenParen => "open_paren",
            LexemeKind::CloseParen => "close_paren",
            LexemeKind::And => "and",
            LexemeKind::Or => "or",
            LexemeKind::Word => "word",
        }
    }

    pub fn is_connective(&self) -> bool {
        matches!(self, LexemeKind::And | LexemeKind::Or)
    }
}

/// One lexeme, borrowing its text from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
    /// Byte range in the lexed input.
    pub span: Range<usize>,
}

/// Split `input` into lexemes. Whitespace between lexemes is discarded.
pub fn lex(input: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut pos = 0;

    while let Some(rest) = input.get(pos..) {
        let trimmed = rest.trim_start();
        let start = pos + (rest.len() - trimmed.len());
        let Some(first) = trimmed.chars().next() else {
            break;
        };

        let (kind, len) = match first {
            '"' => match quoted_len(trimmed) {
                Some(len) => (LexemeKind::Quoted, len),
                None => (LexemeKind::Word, word_len(trimmed)),
            },
            '(' => (LexemeKind::OpenParen, 1),
            ')' => (LexemeKind::CloseParen, 1),
            _ if trimmed.starts_with("&&") => (LexemeKind::And, 2),
            _ if trimmed.starts_with("||") => (LexemeKind::Or, 2),
            _ => (LexemeKind::Word, word_len(trimmed)),
        };

        let end = start + len;
        lexemes.push(Lexeme {
            kind,
            text: &trimmed[..len],
            span: start..end,
        });
        pos = end;
    }

    lexemes
}

/// Byte length of the quoted string at the start of `s`, closing quote
/// included. A backslash escapes any character except a line terminator.
fn quoted_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(i + 1),
            '\\' => match chars.next() {
                Some((_, escaped)) if !is_line_terminator(escaped) => {}
                _ => return None,
            },
            _ => {}
        }
    }
    None
}

fn word_len(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .unwrap_or(s.len())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
