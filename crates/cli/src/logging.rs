// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr, filtered by `QK_LOG`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `qk_core=trace`).
pub const LOG_ENV: &str = "QK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `QK_LOG`, falling back to warnings only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
