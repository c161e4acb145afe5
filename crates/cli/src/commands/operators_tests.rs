// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn text_groups_by_family() {
    if colors::should_colorize() {
        return;
    }
    let text = render(OutputFormat::Text).unwrap();
    let core = text.find("Core:").unwrap();
    let ci = text.find("Case-insensitive:").unwrap();
    let count = text.find("Count:").unwrap();
    assert!(core < ci && ci < count);
    assert!(text.contains("  ==     Equals"));
    assert!(text.contains("  !_-=*  DoesNotEndWithCaseInsensitive"));
    assert!(text.ends_with("#!=    CountNotEquals"));
}

#[test]
fn text_lists_every_operator() {
    if colors::should_colorize() {
        return;
    }
    let text = render(OutputFormat::Text).unwrap();
    let rows = text.lines().filter(|l| l.starts_with("  ")).count();
    assert_eq!(rows, Operator::ALL.len());
}

#[test]
fn json_entries_carry_flags() {
    let json: serde_json::Value =
        serde_json::from_str(&render(OutputFormat::Json).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 36);

    let contains = entries.iter().find(|e| e["literal"] == "@=").unwrap();
    assert_eq!(contains["name"], "Contains");
    assert_eq!(contains["family"], "core");
    assert_eq!(contains["pattern"], true);
    assert_eq!(contains["list"], false);

    let in_ci = entries.iter().find(|e| e["literal"] == "^^*").unwrap();
    assert_eq!(in_ci["family"], "case_insensitive");
    assert_eq!(in_ci["list"], true);
}
