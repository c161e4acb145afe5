// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod build;
pub mod operators;
pub mod schema;
pub mod tokens;
pub mod validate;

use std::io::{self, Read};

use crate::error::{Error, Result};

/// Take the query from the argument, or read it from stdin.
pub fn read_query(arg: Option<String>) -> Result<String> {
    read_query_from(arg, io::stdin().lock())
}

/// Internal implementation that accepts a reader for testing.
pub(crate) fn read_query_from(arg: Option<String>, mut reader: impl Read) -> Result<String> {
    let query = match arg {
        Some(query) => query,
        None => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            // Piped input usually ends with a newline.
            text.trim_end_matches(['\n', '\r']).to_string()
        }
    };
    if query.trim().is_empty() {
        return Err(Error::MissingQuery);
    }
    Ok(query)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
