// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cardinality comparisons (`#>`, `#==`, ...). Values are integers only.

use super::QueryBuilder;
use crate::operator::Operator;

impl QueryBuilder {
    /// `property #> count`
    pub fn count_greater_than(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.op(property, Operator::CountGreaterThan, count.into(), false)
    }

    pub fn count_less_than(&mut self, property: &str, count: impl Into<Option<i64>>) -> &mut Self {
        self.op(property, Operator::CountLessThan, count.into(), false)
    }

    pub fn count_greater_than_or_equal(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.op(property, Operator::CountGreaterThanOrEqual, count.into(), false)
    }

    pub fn count_less_than_or_equal(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.op(property, Operator::CountLessThanOrEqual, count.into(), false)
    }

    /// `property #== count`
    pub fn count_equals(&mut self, property: &str, count: impl Into<Option<i64>>) -> &mut Self {
        self.op(property, Operator::CountEquals, count.into(), false)
    }

    pub fn count_not_equals(&mut self, property: &str, count: impl Into<Option<i64>>) -> &mut Self {
        self.op(property, Operator::CountNotEquals, count.into(), false)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Aliases
    // ─────────────────────────────────────────────────────────────────────

    /// Same as [`QueryBuilder::count_equals`].
    pub fn equals_case_count(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.count_equals(property, count)
    }

    /// Same as [`QueryBuilder::count_not_equals`].
    pub fn not_equals_case_count(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.count_not_equals(property, count)
    }

    /// Same as [`QueryBuilder::count_greater_than`].
    pub fn greater_than_case_count(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.count_greater_than(property, count)
    }

    /// Same as [`QueryBuilder::count_less_than`].
    pub fn less_than_case_count(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.count_less_than(property, count)
    }

    /// Same as [`QueryBuilder::count_greater_than_or_equal`].
    pub fn greater_than_or_equal_case_count(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.count_greater_than_or_equal(property, count)
    }

    /// Same as [`QueryBuilder::count_less_than_or_equal`].
    pub fn less_than_or_equal_case_count(
        &mut self,
        property: &str,
        count: impl Into<Option<i64>>,
    ) -> &mut Self {
        self.count_less_than_or_equal(property, count)
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
