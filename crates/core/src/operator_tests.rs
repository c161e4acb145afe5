// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashSet;
use yare::parameterized;

#[test]
fn literals_are_unique() {
    let literals: HashSet<&str> = Operator::ALL.iter().map(Operator::as_str).collect();
    assert_eq!(literals.len(), Operator::ALL.len());
}

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = Operator::ALL.iter().map(Operator::name).collect();
    assert_eq!(names.len(), Operator::ALL.len());
}

#[test]
fn from_literal_round_trips_every_operator() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_literal(op.as_str()), Some(op));
    }
}

#[parameterized(
    equals = { "==", Operator::Equals },
    contains = { "@=", Operator::Contains },
    sounds_like = { "~~", Operator::SoundsLike },
    does_not_sound_like = { "!~", Operator::DoesNotSoundLike },
    has = { "^$", Operator::Has },
    not_in_ci = { "!^^*", Operator::NotInCaseInsensitive },
    ends_with_ci = { "_-=*", Operator::EndsWithCaseInsensitive },
    count_ne = { "#!=", Operator::CountNotEquals },
    count_ge = { "#>=", Operator::CountGreaterThanOrEqual },
)]
fn from_str_literal(input: &str, expected: Operator) {
    assert_eq!(input.parse::<Operator>().unwrap(), expected);
}

#[parameterized(
    exact = { "Contains", Operator::Contains },
    lower = { "contains", Operator::Contains },
    upper = { "COUNTEQUALS", Operator::CountEquals },
    long = { "DoesNotStartWithCaseInsensitive", Operator::DoesNotStartWithCaseInsensitive },
)]
fn from_str_name(input: &str, expected: Operator) {
    assert_eq!(input.parse::<Operator>().unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    unknown_literal = { "=~" },
    unknown_name = { "Matches" },
    padded = { " == " },
)]
fn from_str_invalid(input: &str) {
    let err = input.parse::<Operator>().unwrap_err();
    assert_eq!(err, Error::UnknownOperator(input.to_string()));
}

#[test]
fn families_partition_the_catalog() {
    let count = |family: OperatorFamily| {
        Operator::ALL
            .iter()
            .filter(|op| op.family() == family)
            .count()
    };
    assert_eq!(count(OperatorFamily::Core), 18);
    assert_eq!(count(OperatorFamily::CaseInsensitive), 12);
    assert_eq!(count(OperatorFamily::Count), 6);
}

#[test]
fn case_insensitive_literals_are_suffixed_core_literals() {
    for op in Operator::ALL
        .iter()
        .filter(|op| op.family() == OperatorFamily::CaseInsensitive)
    {
        let base = op.as_str().trim_end_matches('*');
        let core = Operator::from_literal(base).unwrap();
        assert_eq!(core.family(), OperatorFamily::Core, "{op:?}");
    }
}

#[parameterized(
    starts_with = { Operator::StartsWith, true },
    contains_ci = { Operator::ContainsCaseInsensitive, true },
    does_not_sound_like = { Operator::DoesNotSoundLike, true },
    equals = { Operator::Equals, false },
    has = { Operator::Has, false },
    has_ci = { Operator::HasCaseInsensitive, false },
    count_equals = { Operator::CountEquals, false },
    in_list = { Operator::In, false },
)]
fn is_pattern(op: Operator, expected: bool) {
    assert_eq!(op.is_pattern(), expected);
}

#[test]
fn list_operators() {
    let lists: Vec<Operator> = Operator::ALL.into_iter().filter(Operator::is_list).collect();
    assert_eq!(
        lists,
        vec![
            Operator::In,
            Operator::NotIn,
            Operator::InCaseInsensitive,
            Operator::NotInCaseInsensitive,
        ]
    );
}

#[test]
fn list_operator_try_from_rejects_scalar_operator() {
    let err = ListOperator::try_from(Operator::Equals).unwrap_err();
    assert_eq!(err, Error::NotAListOperator(Operator::Equals));
}

#[test]
fn list_operator_literals_match_operator() {
    assert_eq!(ListOperator::In.as_str(), "^^");
    assert_eq!(ListOperator::NotIn.as_str(), "!^^");
    assert_eq!(ListOperator::InCaseInsensitive.as_str(), "^^*");
    assert_eq!(ListOperator::NotInCaseInsensitive.as_str(), "!^^*");
}

#[test]
fn list_operator_from_str() {
    assert_eq!("^^*".parse::<ListOperator>().unwrap(), ListOperator::InCaseInsensitive);
    assert_eq!("notin".parse::<ListOperator>().unwrap(), ListOperator::NotIn);
    assert!("==".parse::<ListOperator>().is_err());
}

#[test]
fn serde_uses_literal() {
    let json = serde_json::to_string(&Operator::ContainsCaseInsensitive).unwrap();
    assert_eq!(json, "\"@=*\"");
    let op: Operator = serde_json::from_str("\"#<=\"").unwrap();
    assert_eq!(op, Operator::CountLessThanOrEqual);
}

#[test]
fn display_is_literal() {
    assert_eq!(Operator::DoesNotEndWith.to_string(), "!_-=");
    assert_eq!(OperatorFamily::CaseInsensitive.to_string(), "case_insensitive");
}

#[test]
fn valid_literals_lists_catalog() {
    let literals = Operator::valid_literals();
    assert!(literals.starts_with("==, !=,"));
    assert!(literals.ends_with("#!="));
}
