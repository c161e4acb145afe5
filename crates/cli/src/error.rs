// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the qk CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("query is invalid ({count} {})", if *count == 1 { "error" } else { "errors" })]
    InvalidQuery { count: usize },

    #[error("no query given\n  hint: pass the query as an argument or pipe it on stdin")]
    MissingQuery,

    #[error("unsupported filter file format: '{0}'\n  hint: use a .toml or .json file, or pass --format")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid filter file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for qk operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
