// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for qk-core operations.
//!
//! Building and validating queries never fails: absent values are silent
//! no-ops and malformed queries come back as a
//! [`ValidationResult`](crate::ValidationResult). These errors only cover
//! converting text into catalog types.

use thiserror::Error;

use crate::operator::Operator;

/// All possible errors that can occur in qk-core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown operator: '{0}'\n  hint: valid operators are: {valid}", valid = Operator::valid_literals())]
    UnknownOperator(String),

    #[error("operator '{0}' cannot take a list\n  hint: list operators are: ^^, !^^, ^^*, !^^*")]
    NotAListOperator(Operator),

    #[error("invalid connective: '{0}'\n  hint: valid connectives are: &&, ||")]
    InvalidConnective(String),

    #[error("invalid parenthesis: '{0}'\n  hint: expected '(' or ')'")]
    InvalidParen(String),
}

/// A specialized Result type for qk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
