// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The operator catalog.
//!
//! Every operator maps to exactly one literal token, and no two operators
//! share a literal. The validator relies on that to recognize the operator
//! position of a condition.
//!
//! # Families
//!
//! - Core: comparison (`==`, `!=`, `>`, `<`, `>=`, `<=`), pattern
//!   (`_=`, `_-=`, `@=`, `~~` and their negations), existence (`^$`, `!^$`)
//!   and membership (`^^`, `!^^`)
//! - Case insensitive: the core literals suffixed with `*`
//! - Count: comparisons against a cardinality (`#>`, `#<`, `#>=`, `#<=`,
//!   `#==`, `#!=`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A filter operator.
///
/// Serialized as its literal token (`"=="`, `"@=*"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Operator {
    #[serde(rename = "==")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "_=")]
    StartsWith,
    #[serde(rename = "!_=")]
    DoesNotStartWith,
    #[serde(rename = "_-=")]
    EndsWith,
    #[serde(rename = "!_-=")]
    DoesNotEndWith,
    #[serde(rename = "@=")]
    Contains,
    #[serde(rename = "!@=")]
    DoesNotContain,
    #[serde(rename = "~~")]
    SoundsLike,
    #[serde(rename = "!~")]
    DoesNotSoundLike,
    #[serde(rename = "^$")]
    Has,
    #[serde(rename = "!^$")]
    DoesNotHave,
    #[serde(rename = "^^")]
    In,
    #[serde(rename = "!^^")]
    NotIn,

    #[serde(rename = "==*")]
    EqualsCaseInsensitive,
    #[serde(rename = "!=*")]
    NotEqualsCaseInsensitive,
    #[serde(rename = "_=*")]
    StartsWithCaseInsensitive,
    #[serde(rename = "!_=*")]
    DoesNotStartWithCaseInsensitive,
    #[serde(rename = "_-=*")]
    EndsWithCaseInsensitive,
    #[serde(rename = "!_-=*")]
    DoesNotEndWithCaseInsensitive,
    #[serde(rename = "@=*")]
    ContainsCaseInsensitive,
    #[serde(rename = "!@=*")]
    DoesNotContainCaseInsensitive,
    #[serde(rename = "^$*")]
    HasCaseInsensitive,
    #[serde(rename = "!^$*")]
    DoesNotHaveCaseInsensitive,
    #[serde(rename = "^^*")]
    InCaseInsensitive,
    #[serde(rename = "!^^*")]
    NotInCaseInsensitive,

    #[serde(rename = "#>")]
    CountGreaterThan,
    #[serde(rename = "#<")]
    CountLessThan,
    #[serde(rename = "#>=")]
    CountGreaterThanOrEqual,
    #[serde(rename = "#<=")]
    CountLessThanOrEqual,
    #[serde(rename = "#==")]
    CountEquals,
    #[serde(rename = "#!=")]
    CountNotEquals,
}

/// The family an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorFamily {
    /// Case-sensitive comparison, pattern, existence and membership operators.
    Core,
    /// `*`-suffixed twins of the core operators.
    CaseInsensitive,
    /// Comparisons against a cardinality. Values are numbers.
    Count,
}

impl OperatorFamily {
    /// Returns the string representation used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorFamily::Core => "core",
            OperatorFamily::CaseInsensitive => "case_insensitive",
            OperatorFamily::Count => "count",
        }
    }
}

impl fmt::Display for OperatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Operator {
    /// Every operator, in catalog order.
    pub const ALL: [Operator; 36] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThanOrEqual,
        Operator::StartsWith,
        Operator::DoesNotStartWith,
        Operator::EndsWith,
        Operator::DoesNotEndWith,
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::SoundsLike,
        Operator::DoesNotSoundLike,
        Operator::Has,
        Operator::DoesNotHave,
        Operator::In,
        Operator::NotIn,
        Operator::EqualsCaseInsensitive,
        Operator::NotEqualsCaseInsensitive,
        Operator::StartsWithCaseInsensitive,
        Operator::DoesNotStartWithCaseInsensitive,
        Operator::EndsWithCaseInsensitive,
        Operator::DoesNotEndWithCaseInsensitive,
        Operator::ContainsCaseInsensitive,
        Operator::DoesNotContainCaseInsensitive,
        Operator::HasCaseInsensitive,
        Operator::DoesNotHaveCaseInsensitive,
        Operator::InCaseInsensitive,
        Operator::NotInCaseInsensitive,
        Operator::CountGreaterThan,
        Operator::CountLessThan,
        Operator::CountGreaterThanOrEqual,
        Operator::CountLessThanOrEqual,
        Operator::CountEquals,
        Operator::CountNotEquals,
    ];

    /// Returns the literal token written into queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::StartsWith => "_=",
            Operator::DoesNotStartWith => "!_=",
            Operator::EndsWith => "_-=",
            Operator::DoesNotEndWith => "!_-=",
            Operator::Contains => "@=",
            Operator::DoesNotContain => "!@=",
            Operator::SoundsLike => "~~",
            Operator::DoesNotSoundLike => "!~",
            Operator::Has => "^$",
            Operator::DoesNotHave => "!^$",
            Operator::In => "^^",
            Operator::NotIn => "!^^",
            Operator::EqualsCaseInsensitive => "==*",
            Operator::NotEqualsCaseInsensitive => "!=*",
            Operator::StartsWithCaseInsensitive => "_=*",
            Operator::DoesNotStartWithCaseInsensitive => "!_=*",
            Operator::EndsWithCaseInsensitive => "_-=*",
            Operator::DoesNotEndWithCaseInsensitive => "!_-=*",
            Operator::ContainsCaseInsensitive => "@=*",
            Operator::DoesNotContainCaseInsensitive => "!@=*",
            Operator::HasCaseInsensitive => "^$*",
            Operator::DoesNotHaveCaseInsensitive => "!^$*",
            Operator::InCaseInsensitive => "^^*",
            Operator::NotInCaseInsensitive => "!^^*",
            Operator::CountGreaterThan => "#>",
            Operator::CountLessThan => "#<",
            Operator::CountGreaterThanOrEqual => "#>=",
            Operator::CountLessThanOrEqual => "#<=",
            Operator::CountEquals => "#==",
            Operator::CountNotEquals => "#!=",
        }
    }

    /// Returns the symbolic name (`"Contains"`, `"CountEquals"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Equals => "Equals",
            Operator::NotEquals => "NotEquals",
            Operator::GreaterThan => "GreaterThan",
            Operator::LessThan => "LessThan",
            Operator::GreaterThanOrEqual => "GreaterThanOrEqual",
            Operator::LessThanOrEqual => "LessThanOrEqual",
            Operator::StartsWith => "StartsWith",
            Operator::DoesNotStartWith => "DoesNotStartWith",
            Operator::EndsWith => "EndsWith",
            Operator::DoesNotEndWith => "DoesNotEndWith",
            Operator::Contains => "Contains",
            Operator::DoesNotContain => "DoesNotContain",
            Operator::SoundsLike => "SoundsLike",
            Operator::DoesNotSoundLike => "DoesNotSoundLike",
            Operator::Has => "Has",
            Operator::DoesNotHave => "DoesNotHave",
            Operator::In => "In",
            Operator::NotIn => "NotIn",
            Operator::EqualsCaseInsensitive => "EqualsCaseInsensitive",
            Operator::NotEqualsCaseInsensitive => "NotEqualsCaseInsensitive",
            Operator::StartsWithCaseInsensitive => "StartsWithCaseInsensitive",
            Operator::DoesNotStartWithCaseInsensitive => "DoesNotStartWithCaseInsensitive",
            Operator::EndsWithCaseInsensitive => "EndsWithCaseInsensitive",
            Operator::DoesNotEndWithCaseInsensitive => "DoesNotEndWithCaseInsensitive",
            Operator::ContainsCaseInsensitive => "ContainsCaseInsensitive",
            Operator::DoesNotContainCaseInsensitive => "DoesNotContainCaseInsensitive",
            Operator::HasCaseInsensitive => "HasCaseInsensitive",
            Operator::DoesNotHaveCaseInsensitive => "DoesNotHaveCaseInsensitive",
            Operator::InCaseInsensitive => "InCaseInsensitive",
            Operator::NotInCaseInsensitive => "NotInCaseInsensitive",
            Operator::CountGreaterThan => "CountGreaterThan",
            Operator::CountLessThan => "CountLessThan",
            Operator::CountGreaterThanOrEqual => "CountGreaterThanOrEqual",
            Operator::CountLessThanOrEqual => "CountLessThanOrEqual",
            Operator::CountEquals => "CountEquals",
            Operator::CountNotEquals => "CountNotEquals",
        }
    }

    /// Returns the family this operator belongs to.
    pub fn family(&self) -> OperatorFamily {
        match self {
            Operator::CountGreaterThan
            | Operator::CountLessThan
            | Operator::CountGreaterThanOrEqual
            | Operator::CountLessThanOrEqual
            | Operator::CountEquals
            | Operator::CountNotEquals => OperatorFamily::Count,
            op if op.as_str().ends_with('*') => OperatorFamily::CaseInsensitive,
            _ => OperatorFamily::Core,
        }
    }

    /// Returns true for pattern operators, whose value is always quoted even
    /// when given a number or boolean.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Operator::StartsWith
                | Operator::DoesNotStartWith
                | Operator::EndsWith
                | Operator::DoesNotEndWith
                | Operator::Contains
                | Operator::DoesNotContain
                | Operator::SoundsLike
                | Operator::DoesNotSoundLike
                | Operator::StartsWithCaseInsensitive
                | Operator::DoesNotStartWithCaseInsensitive
                | Operator::EndsWithCaseInsensitive
                | Operator::DoesNotEndWithCaseInsensitive
                | Operator::ContainsCaseInsensitive
                | Operator::DoesNotContainCaseInsensitive
        )
    }

    /// Returns true for the membership operators that take a `[...]` list.
    pub fn is_list(&self) -> bool {
        ListOperator::try_from(*self).is_ok()
    }

    /// Look up an operator by its literal token.
    pub fn from_literal(literal: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.as_str() == literal)
    }

    /// Returns valid operator literals for error messages.
    pub fn valid_literals() -> String {
        Operator::ALL
            .iter()
            .map(Operator::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Accepts a literal (`"@=*"`) or a symbolic name (`"containscaseinsensitive"`).
    fn from_str(s: &str) -> Result<Self> {
        if let Some(op) = Operator::from_literal(s) {
            return Ok(op);
        }
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

/// The membership operators, the only ones accepted by
/// [`QueryBuilder::in_list`](crate::QueryBuilder::in_list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ListOperator {
    #[serde(rename = "^^")]
    In,
    #[serde(rename = "!^^")]
    NotIn,
    #[serde(rename = "^^*")]
    InCaseInsensitive,
    #[serde(rename = "!^^*")]
    NotInCaseInsensitive,
}

impl ListOperator {
    /// Returns the literal token written into queries.
    pub fn as_str(&self) -> &'static str {
        Operator::from(*self).as_str()
    }
}

impl From<ListOperator> for Operator {
    fn from(op: ListOperator) -> Self {
        match op {
            ListOperator::In => Operator::In,
            ListOperator::NotIn => Operator::NotIn,
            ListOperator::InCaseInsensitive => Operator::InCaseInsensitive,
            ListOperator::NotInCaseInsensitive => Operator::NotInCaseInsensitive,
        }
    }
}

impl TryFrom<Operator> for ListOperator {
    type Error = Error;

    fn try_from(op: Operator) -> Result<Self> {
        match op {
            Operator::In => Ok(ListOperator::In),
            Operator::NotIn => Ok(ListOperator::NotIn),
            Operator::InCaseInsensitive => Ok(ListOperator::InCaseInsensitive),
            Operator::NotInCaseInsensitive => Ok(ListOperator::NotInCaseInsensitive),
            other => Err(Error::NotAListOperator(other)),
        }
    }
}

impl fmt::Display for ListOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ListOperator::try_from(s.parse::<Operator>()?)
    }
}

#[cfg(test)]
#[path = "operator_tests.rs"]
mod tests;
