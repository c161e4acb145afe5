// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core comparison, pattern and membership methods.
//!
//! Comparisons render values by type. Pattern methods always quote, so
//! `contains("Code", 42)` writes `Code @= "42"`.

use super::QueryBuilder;
use crate::operator::{ListOperator, Operator};
use crate::value::IntoScalar;

impl QueryBuilder {
    // ─────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────

    /// `property == value`
    pub fn equals(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::Equals, value, false)
    }

    /// `property != value`
    pub fn not_equals(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::NotEquals, value, false)
    }

    pub fn greater_than(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::GreaterThan, value, false)
    }

    pub fn less_than(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::LessThan, value, false)
    }

    pub fn greater_than_or_equal(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::GreaterThanOrEqual, value, false)
    }

    pub fn less_than_or_equal(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::LessThanOrEqual, value, false)
    }

    /// `property ^$ value`: the collection contains `value`.
    pub fn has(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::Has, value, false)
    }

    pub fn does_not_have(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::DoesNotHave, value, false)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pattern
    // ─────────────────────────────────────────────────────────────────────

    /// `property _= "value"`
    pub fn starts_with(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::StartsWith, value, true)
    }

    pub fn does_not_start_with(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::DoesNotStartWith, value, true)
    }

    /// `property _-= "value"`
    pub fn ends_with(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::EndsWith, value, true)
    }

    pub fn does_not_end_with(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::DoesNotEndWith, value, true)
    }

    /// `property @= "value"`
    pub fn contains(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::Contains, value, true)
    }

    pub fn does_not_contain(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::DoesNotContain, value, true)
    }

    /// `property ~~ "value"`: phonetic match.
    pub fn sounds_like(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::SoundsLike, value, true)
    }

    pub fn does_not_sound_like(&mut self, property: &str, value: impl IntoScalar) -> &mut Self {
        self.op(property, Operator::DoesNotSoundLike, value, true)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────────────────

    /// `property ^^ [v1,v2,...]`
    pub fn is_in<I>(&mut self, property: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        self.in_list(property, ListOperator::In, values)
    }

    /// `property !^^ [v1,v2,...]`
    pub fn not_in<I>(&mut self, property: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        self.in_list(property, ListOperator::NotIn, values)
    }
}

#[cfg(test)]
#[path = "core_ops_tests.rs"]
mod tests;
