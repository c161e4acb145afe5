// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent query builder.
//!
//! A [`QueryBuilder`] accumulates query text and a parallel list of
//! [`Token`]s. Every mutator takes `&mut self` and returns `&mut Self`, so
//! calls chain:
//!
//! ```
//! use qk_core::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.equals("User.Id", 5).and().contains("User.Name", "ann");
//! assert_eq!(qb.build(), r#"User.Id == 5 && User.Name @= "ann""#);
//! ```
//!
//! Operator methods are grouped by family: comparison, pattern and
//! membership in `core_ops`, the `*`-suffixed twins in `case_insensitive`,
//! cardinality comparisons in `count`.
//!
//! Absent values (`None`, empty lists, blank fragments) are silent no-ops:
//! they write no text and record no token.

mod case_insensitive;
mod core_ops;
mod count;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encode::percent_encode;
use crate::operator::{ListOperator, Operator};
use crate::token::{
    render_list, strip_filter_prefix, Connective, ParenKind, Token, FILTER_MARKER, FILTER_PREFIX,
};
use crate::value::{IntoScalar, Scalar};

/// Options fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BuilderOptions {
    /// Percent-encode the query returned by [`QueryBuilder::build`].
    #[serde(default)]
    pub encode_uri: bool,
    /// Start the query with the `Filters= ` marker.
    #[serde(default)]
    pub filter_prefix: bool,
}

/// Input accepted by [`QueryBuilder::append`].
#[derive(Debug, Clone, Copy)]
pub enum Fragment<'a> {
    /// Raw query text.
    Text(&'a str),
    /// The current text of another builder.
    Builder(&'a QueryBuilder),
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(text: &'a str) -> Self {
        Fragment::Text(text)
    }
}

impl<'a> From<&'a String> for Fragment<'a> {
    fn from(text: &'a String) -> Self {
        Fragment::Text(text)
    }
}

impl<'a> From<&'a QueryBuilder> for Fragment<'a> {
    fn from(builder: &'a QueryBuilder) -> Self {
        Fragment::Builder(builder)
    }
}

impl<'a> From<&'a mut QueryBuilder> for Fragment<'a> {
    fn from(builder: &'a mut QueryBuilder) -> Self {
        Fragment::Builder(builder)
    }
}

/// Accumulates a filter query and its tokens.
///
/// `Clone` copies the text and tokens verbatim, prefix included; the clone
/// never adds a second prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    text: String,
    tokens: Vec<Token>,
    options: BuilderOptions,
}

impl QueryBuilder {
    /// Create a builder without URI encoding or prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options.
    pub fn with_options(options: BuilderOptions) -> Self {
        let mut builder = QueryBuilder {
            text: String::new(),
            tokens: Vec::new(),
            options,
        };
        if options.filter_prefix {
            builder.push_fragment(FILTER_PREFIX, Token::raw(FILTER_MARKER));
        }
        builder
    }

    /// Create a builder by replaying tokens through [`QueryBuilder::apply`].
    pub fn from_tokens<'a>(
        options: BuilderOptions,
        tokens: impl IntoIterator<Item = &'a Token>,
    ) -> Self {
        let mut builder = Self::with_options(options);
        for token in tokens {
            builder.apply(token);
        }
        builder
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Returns the tokens recorded so far, in call order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns true if nothing follows the optional prefix.
    pub fn is_empty(&self) -> bool {
        self.body().trim().is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Conditions
    // ─────────────────────────────────────────────────────────────────────

    /// Append `property operator value`.
    ///
    /// With `force_quote` the value is stringified and quoted whatever its
    /// type; the recorded token then holds the string form.
    pub fn op(
        &mut self,
        property: &str,
        operator: Operator,
        value: impl IntoScalar,
        force_quote: bool,
    ) -> &mut Self {
        let Some(value) = value.into_scalar() else {
            tracing::trace!(property, %operator, "skipping condition without value");
            return self;
        };
        let value = if force_quote {
            value.stringified()
        } else {
            value
        };
        let text = format!("{} {} {} ", property, operator, value.render(false));
        self.push_fragment(&text, Token::condition(property, operator, value));
        self
    }

    /// Append `property operator [v1,v2,...]`.
    ///
    /// Absent entries are dropped. When nothing is left the call is a no-op,
    /// so an absent list can be passed as an empty iterator.
    pub fn in_list<I>(&mut self, property: &str, operator: ListOperator, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        let values: Vec<Scalar> = values
            .into_iter()
            .filter_map(IntoScalar::into_scalar)
            .collect();
        if values.is_empty() {
            tracing::trace!(property, %operator, "skipping list without values");
            return self;
        }
        let text = format!("{} {} [{}] ", property, operator, render_list(&values));
        self.push_fragment(
            &text,
            Token::ArrayCondition {
                property: property.to_string(),
                operator,
                values,
            },
        );
        self
    }

    /// Append a raw condition followed by a space.
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        if condition.trim().is_empty() {
            return self;
        }
        self.push_fragment(&format!("{condition} "), Token::raw(condition));
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────

    pub fn and(&mut self) -> &mut Self {
        self.connective(Connective::And)
    }

    pub fn or(&mut self) -> &mut Self {
        self.connective(Connective::Or)
    }

    /// Append ` && ` or ` || ` after trimming trailing whitespace. On an
    /// empty prefixed builder the prefix's own space is trimmed too.
    pub fn connective(&mut self, connective: Connective) -> &mut Self {
        self.trim_end();
        self.push_fragment(
            &format!(" {connective} "),
            Token::Logical {
                operator: connective,
            },
        );
        self
    }

    pub fn open_paren(&mut self) -> &mut Self {
        self.paren(ParenKind::Open)
    }

    pub fn close_paren(&mut self) -> &mut Self {
        self.paren(ParenKind::Close)
    }

    fn paren(&mut self, kind: ParenKind) -> &mut Self {
        self.push_fragment(kind.as_str(), Token::Paren { value: kind });
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Composition
    // ─────────────────────────────────────────────────────────────────────

    /// Append raw text or another builder's current text.
    ///
    /// A leading `Filters=` marker is stripped from the fragment; a fragment
    /// that is blank after stripping is a no-op. The
    /// connective is only written when the query so far is non-empty and
    /// does not already end with `(` or a connective.
    pub fn append<'a>(
        &mut self,
        fragment: impl Into<Fragment<'a>>,
        connective: impl Into<Option<Connective>>,
    ) -> &mut Self {
        let incoming = match fragment.into() {
            Fragment::Text(text) => text.to_string(),
            Fragment::Builder(other) => other.text.clone(),
        };
        let incoming = strip_filter_prefix(&incoming);
        if incoming.trim().is_empty() {
            tracing::trace!("skipping blank fragment");
            return self;
        }

        let current = self.body().trim();
        let has_content = !current.is_empty();
        let after_open = current.ends_with('(');
        let after_connective = ends_with_connective(current);

        match connective.into() {
            Some(connective) if has_content && !after_open && !after_connective => {
                self.connective(connective);
            }
            _ if has_content && !after_open => {
                self.trim_end();
                self.text.push(' ');
            }
            _ => {}
        }

        self.push_fragment(incoming, Token::raw(incoming));
        self
    }

    /// Append another builder's text wrapped in parentheses.
    ///
    /// Unlike [`QueryBuilder::append`], the connective is written whenever
    /// the query so far is non-empty, even right after `(` or a connective.
    pub fn concat(
        &mut self,
        other: &QueryBuilder,
        connective: impl Into<Option<Connective>>,
    ) -> &mut Self {
        if let Some(connective) = connective.into() {
            if !self.body().trim().is_empty() {
                self.connective(connective);
            }
        }
        let group = format!("({})", strip_filter_prefix(other.text.trim()));
        self.push_fragment(&format!("{group} "), Token::raw(group));
        self
    }

    /// Replay one token through the matching builder method.
    pub fn apply(&mut self, token: &Token) -> &mut Self {
        match token {
            Token::Condition {
                property,
                operator,
                value,
            } => self.op(property, *operator, value, operator.is_pattern()),
            Token::ArrayCondition {
                property,
                operator,
                values,
            } => self.in_list(property, *operator, values),
            Token::Logical { operator } => self.connective(*operator),
            Token::Paren { value } => self.paren(*value),
            Token::Raw { value } => self.replay_raw(value),
        }
    }

    // Raw tokens from add_condition and concat were written with a trailing
    // space; keep replayed text separated the same way.
    fn replay_raw(&mut self, value: &str) -> &mut Self {
        let before = self.tokens.len();
        self.append(value, None);
        if self.tokens.len() > before && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────

    /// Finalize the query.
    ///
    /// Trims whitespace, drops dangling `&&`/`||` at the end, and
    /// percent-encodes when the builder was created with `encode_uri`.
    /// Does not modify the builder.
    pub fn build(&self) -> String {
        let query = strip_trailing_connectives(self.text.trim());
        if self.options.encode_uri {
            percent_encode(query).into_owned()
        } else {
            query.to_string()
        }
    }

    // Text and token always change together.
    fn push_fragment(&mut self, text: &str, token: Token) {
        self.text.push_str(text);
        self.tokens.push(token);
    }

    fn body(&self) -> &str {
        if self.options.filter_prefix {
            self.text.strip_prefix(FILTER_PREFIX).unwrap_or(&self.text)
        } else {
            &self.text
        }
    }

    fn trim_end(&mut self) {
        let len = self.text.trim_end().len();
        self.text.truncate(len);
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build())
    }
}

fn ends_with_connective(text: &str) -> bool {
    text.ends_with(Connective::And.as_str()) || text.ends_with(Connective::Or.as_str())
}

fn strip_trailing_connectives(mut query: &str) -> &str {
    while let Some(rest) = query
        .strip_suffix(Connective::And.as_str())
        .or_else(|| query.strip_suffix(Connective::Or.as_str()))
    {
        query = rest.trim_end();
    }
    query
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
