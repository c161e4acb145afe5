// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case-insensitive twins of the core methods.
//!
//! Only equality, pattern, existence and membership operators have a
//! case-insensitive literal; ordering and phonetic matching do not.

use super::QueryBuilder;
use crate::operator::{ListOperator, Operator};
use crate::value::IntoScalar;

impl QueryBuilder {
    /// `property ==* value`
    pub fn equals_case_insensitive(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::EqualsCaseInsensitive, value, false)
    }

    pub fn not_equals_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::NotEqualsCaseInsensitive, value, false)
    }

    pub fn has_case_insensitive(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::HasCaseInsensitive, value, false)
    }

    pub fn does_not_have_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::DoesNotHaveCaseInsensitive, value, false)
    }

    pub fn starts_with_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::StartsWithCaseInsensitive, value, true)
    }

    pub fn does_not_start_with_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::DoesNotStartWithCaseInsensitive, value, true)
    }

    pub fn ends_with_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::EndsWithCaseInsensitive, value, true)
    }

    pub fn does_not_end_with_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::DoesNotEndWithCaseInsensitive, value, true)
    }

    /// `property @=* "value"`
    pub fn contains_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::ContainsCaseInsensitive, value, true)
    }

    pub fn does_not_contain_case_insensitive(
        &mut self,
        property: &str,
        value: impl IntoScalar,
    ) -> &mut Self {
        self.op(property, Operator::DoesNotContainCaseInsensitive, value, true)
    }

    /// `property ^^* [v1,v2,...]`
    pub fn in_case_insensitive<I>(&mut self, property: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        self.in_list(property, ListOperator::InCaseInsensitive, values)
    }

    pub fn not_in_case_insensitive<I>(&mut self, property: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        self.in_list(property, ListOperator::NotInCaseInsensitive, values)
    }
}

#[cfg(test)]
#[path = "case_insensitive_tests.rs"]
mod tests;
