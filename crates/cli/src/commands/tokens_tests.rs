// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn text_lists_lexemes_in_order() {
    if colors::should_colorize() {
        return;
    }
    let lexemes = lex(r#"(Name == "a b")"#);
    let text = render(&lexemes, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "  1  open_paren   (");
    assert_eq!(lines[3], r#"  4  quoted       "a b""#);
    assert_eq!(lines[4], "  5  close_paren  )");
}

#[test]
fn empty_query_renders_nothing() {
    assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
}

#[test]
fn json_includes_spans() {
    let lexemes = lex("A == 1 && B != 2");
    let json: serde_json::Value =
        serde_json::from_str(&render(&lexemes, OutputFormat::Json).unwrap()).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[3]["kind"], "and");
    assert_eq!(items[3]["text"], "&&");
    assert_eq!(items[3]["span"]["start"], 7);
    assert_eq!(items[3]["span"]["end"], 9);
}
