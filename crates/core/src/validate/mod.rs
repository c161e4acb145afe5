// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validation of query strings.
//!
//! [`validate_query`] accepts any string, not only builder output. It checks
//! that conditions and connectives alternate and that parentheses balance.
//! A condition is recognized as three lexemes whose middle one is a known
//! operator literal; values and property names are not checked.

pub mod lexer;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::operator::Operator;
use crate::token::strip_filter_prefix;
pub use lexer::{lex, Lexeme, LexemeKind};

/// A structural problem found by [`validate_query`]. Indexes are 1-based
/// lexeme positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Expected condition at token {index}, found \"{found}\"")]
    ExpectedCondition { index: usize, found: String },

    #[error("Expected && or || at token {index}, found \"{found}\"")]
    ExpectedConnective { index: usize, found: String },

    #[error("Unmatched closing parenthesis at token {index}")]
    UnmatchedClosingParen { index: usize },

    #[error("Query ends with a logical operator")]
    EndsWithConnective,

    #[error("Unmatched opening parenthesis")]
    UnmatchedOpeningParen,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of [`validate_query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { errors: Vec<ValidationError> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid { errors } => errors,
        }
    }

    /// Error messages in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}

/// Serializes as `{"valid":true}` or `{"valid":false,"errors":[...]}`.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Valid => {
                let mut s = serializer.serialize_struct("ValidationResult", 1)?;
                s.serialize_field("valid", &true)?;
                s.end()
            }
            ValidationResult::Invalid { errors } => {
                let mut s = serializer.serialize_struct("ValidationResult", 2)?;
                s.serialize_field("valid", &false)?;
                s.serialize_field("errors", errors)?;
                s.end()
            }
        }
    }
}

/// Check `query` for structural well-formedness.
///
/// Leading and trailing whitespace and one leading `Filters=` marker are
/// ignored. An empty query is valid. Scanning stops at the first lexeme that
/// breaks the alternation; the end-of-input checks still run afterwards.
pub fn validate_query(query: &str) -> ValidationResult {
    let body = strip_filter_prefix(query.trim());
    if body.is_empty() {
        return ValidationResult::Valid;
    }

    let lexemes = lex(body);
    let mut errors = Vec::new();
    let mut expect_condition = true;
    let mut depth: usize = 0;
    let mut i = 0;

    while let Some(lexeme) = lexemes.get(i) {
        let index = i + 1;

        if expect_condition {
            if lexeme.kind == LexemeKind::OpenParen {
                depth += 1;
                i += 1;
            } else if starts_condition(&lexemes, i) {
                expect_condition = false;
                i += 3;
            } else {
                errors.push(ValidationError::ExpectedCondition {
                    index,
                    found: lexeme.text.to_string(),
                });
                break;
            }
            continue;
        }

        match lexeme.kind {
            LexemeKind::And | LexemeKind::Or => expect_condition = true,
            LexemeKind::CloseParen if depth > 0 => depth -= 1,
            LexemeKind::CloseParen => {
                errors.push(ValidationError::UnmatchedClosingParen { index });
                break;
            }
            _ => {
                errors.push(ValidationError::ExpectedConnective {
                    index,
                    found: lexeme.text.to_string(),
                });
                break;
            }
        }
        i += 1;
    }

    if expect_condition {
        errors.push(ValidationError::EndsWithConnective);
    }
    if depth > 0 {
        errors.push(ValidationError::UnmatchedOpeningParen);
    }

    tracing::debug!(lexemes = lexemes.len(), errors = errors.len(), "validated query");

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid { errors }
    }
}

/// `property operator value` starting at `i`.
fn starts_condition(lexemes: &[Lexeme<'_>], i: usize) -> bool {
    let (Some(property), Some(operator), Some(_value)) =
        (lexemes.get(i), lexemes.get(i + 1), lexemes.get(i + 2))
    else {
        return false;
    };
    !property.kind.is_connective()
        && !matches!(
            property.kind,
            LexemeKind::OpenParen | LexemeKind::CloseParen
        )
        && Operator::from_literal(operator.text).is_some()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
