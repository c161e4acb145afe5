// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::config::FileFormat;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "qk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Build and validate filter queries")]
#[command(
    long_about = "Build and validate filter queries.\n\n\
    Queries are conditions such as `Age >= 21` joined with && and ||, grouped with parentheses."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────
    /// Check a query's structure
    ///
    /// Reads the query from stdin when no argument is given. Exits with
    /// status 1 when the query is invalid.
    #[command(after_help = colors::examples("\
Examples:
  qk validate \"Age == 30 && Active == true\"    Validate a query
  qk validate \"(A == 1 || B == 2\" -o json     Report errors as JSON
  echo \"Filters= A == 1\" | qk validate        Validate from stdin"))]
    Validate {
        /// Query text (read from stdin if omitted)
        query: Option<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show how a query is lexed
    #[command(after_help = colors::examples("\
Examples:
  qk tokens \"Id ^^ [1,2] && Tags #> 2\"    List lexemes
  qk tokens \"A == 1\" -o json              Lexemes with byte spans"))]
    Tokens {
        /// Query text (read from stdin if omitted)
        query: Option<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Build a query from a filter file
    ///
    /// The file holds builder options and a token list in TOML or JSON.
    /// Run `qk schema` for its structure.
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  qk build filter.toml                     Print the query
  qk build filter.json --encode-uri        Percent-encode the result
  qk build filter.toml --check -o json     Validate and print query with tokens
  cat filter.toml | qk build -             Read the filter from stdin")
    )]
    Build {
        /// Filter file path, or - for stdin
        file: PathBuf,

        /// File format (detected from the extension by default)
        #[arg(long, value_enum)]
        format: Option<FileFormat>,

        /// Percent-encode the query (overrides the file)
        #[arg(long)]
        encode_uri: bool,

        /// Start the query with "Filters= " (overrides the file)
        #[arg(long)]
        filter_prefix: bool,

        /// Validate the built query and fail if it is malformed
        #[arg(long)]
        check: bool,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Reference
    // ─────────────────────────────────────────────────────────────────────────
    /// List operator literals
    Operators {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for filter files
    Schema,

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  qk completions bash > ~/.local/share/bash-completion/completions/qk
  qk completions zsh > ~/.zfunc/_qk
  qk completions fish > ~/.config/fish/completions/qk.fish")
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
