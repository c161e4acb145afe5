// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Percent-encoding for queries embedded in a URL component.

use std::borrow::Cow;

/// Percent-encode a query for use as a URL query-string component.
///
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `~` is encoded,
/// with UTF-8 bytes encoded individually (`é` becomes `%C3%A9`).
pub fn percent_encode(query: &str) -> Cow<'_, str> {
    urlencoding::encode(query)
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
