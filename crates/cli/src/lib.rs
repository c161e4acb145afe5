// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qkrs - the library behind the `qk` command.
//!
//! `qk` validates filter queries, shows how they are lexed, and builds
//! queries from stored filter files using [`qk_core::QueryBuilder`].
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`config`] - filter files in TOML or JSON ([`config::FilterFile`])
//! - [`logging`] - stderr diagnostics controlled by `QK_LOG`
//! - [`Error`] - error types for all commands
//!
//! ```rust,ignore
//! use qkrs::{run, Command, OutputFormat};
//!
//! run(Command::Validate {
//!     query: Some("Age >= 21 && Active == true".into()),
//!     output: OutputFormat::Text,
//! })?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod help;

pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::build::BuildArgs;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Validate { query, output } => commands::validate::run(query, output),
        Command::Tokens { query, output } => commands::tokens::run(query, output),
        Command::Build {
            file,
            format,
            encode_uri,
            filter_prefix,
            check,
            output,
        } => commands::build::run(BuildArgs {
            file,
            format,
            encode_uri,
            filter_prefix,
            check,
            output,
        }),
        Command::Operators { output } => commands::operators::run(output),
        Command::Schema => commands::schema::run(),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "qk", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
