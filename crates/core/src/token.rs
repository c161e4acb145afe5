// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured query fragments.
//!
//! The builder records one [`Token`] per fragment it writes, so consumers
//! can inspect a query without re-parsing it. Rendering the tokens with
//! [`render_tokens`] reproduces the builder's text up to whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::operator::{ListOperator, Operator};
use crate::value::Scalar;

/// Marker some consumers expect at the start of a filter query.
pub const FILTER_PREFIX: &str = "Filters= ";

pub(crate) const FILTER_MARKER: &str = "Filters=";

/// Strip one leading `Filters=` marker and the whitespace after it.
pub fn strip_filter_prefix(query: &str) -> &str {
    match query.strip_prefix(FILTER_MARKER) {
        Some(rest) => rest.trim_start(),
        None => query,
    }
}

/// Logical connective between conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Connective {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

impl Connective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "&&",
            Connective::Or => "||",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Connective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "&&" | "and" => Ok(Connective::And),
            "||" | "or" => Ok(Connective::Or),
            _ => Err(Error::InvalidConnective(s.to_string())),
        }
    }
}

/// Opening or closing parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ParenKind {
    #[serde(rename = "(")]
    Open,
    #[serde(rename = ")")]
    Close,
}

impl ParenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParenKind::Open => "(",
            ParenKind::Close => ")",
        }
    }
}

impl fmt::Display for ParenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "(" => Ok(ParenKind::Open),
            ")" => Ok(ParenKind::Close),
            _ => Err(Error::InvalidParen(s.to_string())),
        }
    }
}

/// One query fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// `property operator value`
    Condition {
        property: String,
        operator: Operator,
        value: Scalar,
    },
    /// `property operator [v1,v2,...]`
    ArrayCondition {
        property: String,
        operator: ListOperator,
        values: Vec<Scalar>,
    },
    /// `&&` or `||`
    Logical { operator: Connective },
    /// `(` or `)`
    Paren { value: ParenKind },
    /// Opaque text inserted by append, concat or add_condition.
    Raw { value: String },
}

impl Token {
    /// Create a condition token.
    pub fn condition(property: impl Into<String>, operator: Operator, value: Scalar) -> Token {
        Token::Condition {
            property: property.into(),
            operator,
            value,
        }
    }

    /// Create a raw token.
    pub fn raw(value: impl Into<String>) -> Token {
        Token::Raw {
            value: value.into(),
        }
    }

    /// Returns the token kind as used in the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Condition { .. } => "condition",
            Token::ArrayCondition { .. } => "array_condition",
            Token::Logical { .. } => "logical",
            Token::Paren { .. } => "paren",
            Token::Raw { .. } => "raw",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Condition {
                property,
                operator,
                value,
            } => write!(f, "{} {} {}", property, operator, value.render(false)),
            Token::ArrayCondition {
                property,
                operator,
                values,
            } => write!(f, "{} {} [{}]", property, operator, render_list(values)),
            Token::Logical { operator } => write!(f, "{operator}"),
            Token::Paren { value } => write!(f, "{value}"),
            Token::Raw { value } => write!(f, "{value}"),
        }
    }
}

/// Render list values with the scalar quoting rule, comma separated.
pub(crate) fn render_list(values: &[Scalar]) -> String {
    values
        .iter()
        .map(|v| v.render(false))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render tokens back to query text, separated by single spaces.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
