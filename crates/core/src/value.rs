// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scalar values and the quoting rule.
//!
//! Strings are written as `"..."` with `\` and `"` escaped. Numbers and
//! booleans are written bare in their canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Scalar {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Render the value as it appears in a query.
    ///
    /// With `force_quote` the value is stringified first, so `5` becomes
    /// `"5"`.
    pub fn render(&self, force_quote: bool) -> String {
        match self {
            Scalar::String(s) => quote(s),
            other if force_quote => quote(&other.to_string()),
            other => other.to_string(),
        }
    }

    /// Returns the value as a string scalar, the form stored for conditions
    /// whose operator forces quoting.
    pub fn stringified(&self) -> Scalar {
        match self {
            Scalar::String(_) => self.clone(),
            other => Scalar::String(other.to_string()),
        }
    }

    /// Reverse [`Scalar::render`] for a quoted literal.
    ///
    /// Returns `None` when `literal` is not a complete quoted string.
    pub fn unquote(literal: &str) -> Option<String> {
        let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => out.push(chars.next()?),
                '"' => return None,
                c => out.push(c),
            }
        }
        Some(out)
    }
}

/// Canonical text: strings unquoted, numbers and booleans as written in
/// queries.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{s}"),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Float(n) if n.is_nan() => write!(f, "NaN"),
            Scalar::Float(n) if n.is_infinite() && *n > 0.0 => write!(f, "Infinity"),
            Scalar::Float(n) if n.is_infinite() => write!(f, "-Infinity"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Wrap a string in double quotes, escaping backslashes and quotes.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Conversion into an optional scalar.
///
/// `None` means the value was not supplied; builder methods skip the
/// condition entirely in that case.
pub trait IntoScalar {
    fn into_scalar(self) -> Option<Scalar>;
}

impl IntoScalar for Scalar {
    fn into_scalar(self) -> Option<Scalar> {
        Some(self)
    }
}

impl IntoScalar for &Scalar {
    fn into_scalar(self) -> Option<Scalar> {
        Some(self.clone())
    }
}

impl IntoScalar for &str {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::String(self.to_string()))
    }
}

impl IntoScalar for String {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::String(self))
    }
}

impl IntoScalar for &String {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::String(self.clone()))
    }
}

impl IntoScalar for char {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::String(self.to_string()))
    }
}

impl IntoScalar for bool {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Boolean(self))
    }
}

macro_rules! integer_into_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoScalar for $t {
                fn into_scalar(self) -> Option<Scalar> {
                    Some(Scalar::Integer(i64::from(self)))
                }
            }
        )*
    };
}

integer_into_scalar!(i8, i16, i32, i64, u8, u16, u32);

impl IntoScalar for u64 {
    fn into_scalar(self) -> Option<Scalar> {
        Some(match i64::try_from(self) {
            Ok(n) => Scalar::Integer(n),
            Err(_) => Scalar::Float(self as f64),
        })
    }
}

impl IntoScalar for usize {
    fn into_scalar(self) -> Option<Scalar> {
        (self as u64).into_scalar()
    }
}

impl IntoScalar for f32 {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Float(f64::from(self)))
    }
}

impl IntoScalar for f64 {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Float(self))
    }
}

impl<T: IntoScalar> IntoScalar for Option<T> {
    fn into_scalar(self) -> Option<Scalar> {
        self.and_then(IntoScalar::into_scalar)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
