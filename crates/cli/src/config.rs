// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter files.
//!
//! A filter file stores builder options and a token list, in TOML or JSON:
//!
//! ```toml
//! encode_uri = false
//! filter_prefix = true
//!
//! [[tokens]]
//! type = "condition"
//! property = "Age"
//! operator = ">="
//! value = 21
//! ```
//!
//! `qk build` replays the tokens through a [`QueryBuilder`].

use clap::ValueEnum;
use qk_core::{BuilderOptions, QueryBuilder, Token};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Path that reads the filter file from stdin.
pub const STDIN_PATH: &str = "-";

/// Serialization format of a filter file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    #[default]
    Toml,
    Json,
}

impl FileFormat {
    /// Pick a format from the file extension. Files without an extension
    /// are read as TOML.
    pub fn from_path(path: &Path) -> Result<FileFormat> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(FileFormat::Toml),
            Some(ext) => match ext.to_lowercase().as_str() {
                "toml" => Ok(FileFormat::Toml),
                "json" => Ok(FileFormat::Json),
                other => Err(Error::UnsupportedFormat(other.to_string())),
            },
        }
    }
}

/// A stored filter: builder options plus the tokens to replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilterFile {
    /// Percent-encode the built query.
    #[serde(default)]
    pub encode_uri: bool,
    /// Start the built query with `Filters= `.
    #[serde(default)]
    pub filter_prefix: bool,
    /// Query fragments in order.
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl FilterFile {
    /// Load a filter file, or stdin when `path` is `-`.
    ///
    /// `format` overrides detection by extension; stdin defaults to TOML.
    pub fn load(path: &Path, format: Option<FileFormat>) -> Result<FilterFile> {
        let (text, detected) = if path.as_os_str() == STDIN_PATH {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            (text, FileFormat::Toml)
        } else {
            let detected = match format {
                Some(format) => format,
                None => FileFormat::from_path(path)?,
            };
            (fs::read_to_string(path)?, detected)
        };
        let file = Self::parse(&text, format.unwrap_or(detected))?;
        tracing::debug!(path = %path.display(), tokens = file.tokens.len(), "loaded filter file");
        Ok(file)
    }

    pub fn parse(text: &str, format: FileFormat) -> Result<FilterFile> {
        match format {
            FileFormat::Toml => Ok(toml::from_str(text)?),
            FileFormat::Json => Ok(serde_json::from_str(text)?),
        }
    }

    pub fn options(&self) -> BuilderOptions {
        BuilderOptions {
            encode_uri: self.encode_uri,
            filter_prefix: self.filter_prefix,
        }
    }

    /// Replay the tokens into a fresh builder.
    pub fn to_builder(&self) -> QueryBuilder {
        QueryBuilder::from_tokens(self.options(), &self.tokens)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
