// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build command implementation.
//!
//! Replays a filter file through a [`QueryBuilder`] and prints the result.

use std::path::PathBuf;

use qk_core::{validate_query, BuilderOptions, QueryBuilder, Token};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{FileFormat, FilterFile};
use crate::error::Result;

/// Arguments of `qk build`.
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    pub file: PathBuf,
    pub format: Option<FileFormat>,
    pub encode_uri: bool,
    pub filter_prefix: bool,
    pub check: bool,
    pub output: OutputFormat,
}

/// JSON output of `qk build`.
#[derive(Debug, Serialize)]
pub(crate) struct BuildOutput<'a> {
    pub query: String,
    pub tokens: &'a [Token],
}

pub fn run(args: BuildArgs) -> Result<()> {
    let file = FilterFile::load(&args.file, args.format)?;
    println!("{}", build_impl(&file, &args)?);
    Ok(())
}

/// Internal implementation that takes an already loaded file.
pub(crate) fn build_impl(file: &FilterFile, args: &BuildArgs) -> Result<String> {
    // Flags can only switch options on.
    let options = BuilderOptions {
        encode_uri: file.encode_uri || args.encode_uri,
        filter_prefix: file.filter_prefix || args.filter_prefix,
    };
    let builder = QueryBuilder::from_tokens(options, &file.tokens);
    let query = builder.build();
    tracing::debug!(%query, tokens = builder.tokens().len(), "built query");

    if args.check {
        // Percent-encoded text cannot be lexed.
        let plain = QueryBuilder::from_tokens(
            BuilderOptions {
                encode_uri: false,
                ..options
            },
            &file.tokens,
        );
        super::validate::check(&validate_query(&plain.build()))?;
    }

    match args.output {
        OutputFormat::Text => Ok(query),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&BuildOutput {
            query,
            tokens: builder.tokens(),
        })?),
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
