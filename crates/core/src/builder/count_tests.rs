// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::builder::QueryBuilder;
use crate::operator::Operator;
use crate::token::Token;
use crate::value::Scalar;

#[test]
fn count_operators() {
    let mut qb = QueryBuilder::new();
    qb.count_greater_than("Comments", 10)
        .count_less_than("Likes", 100)
        .count_greater_than_or_equal("Views", 5)
        .count_less_than_or_equal("Shares", 50)
        .count_equals("Attachments", 3)
        .count_not_equals("Tags", 2);
    assert_eq!(
        qb.build(),
        "Comments #> 10 Likes #< 100 Views #>= 5 Shares #<= 50 Attachments #== 3 Tags #!= 2"
    );
}

#[test]
fn count_records_integer_token() {
    let mut qb = QueryBuilder::new();
    qb.count_equals("Attachments", 0);
    assert_eq!(
        qb.tokens(),
        &[Token::condition(
            "Attachments",
            Operator::CountEquals,
            Scalar::Integer(0)
        )]
    );
}

#[test]
fn count_absent_is_a_no_op() {
    let mut qb = QueryBuilder::new();
    qb.count_greater_than("Comments", None)
        .and()
        .count_not_equals("Tags", Some(-1));
    assert_eq!(qb.build(), "&& Tags #!= -1");
    assert_eq!(qb.tokens().len(), 2);
}

#[test]
fn case_count_aliases_match_count_methods() {
    let mut aliases = QueryBuilder::new();
    aliases
        .equals_case_count("A", 1)
        .not_equals_case_count("B", 2)
        .greater_than_case_count("C", 3)
        .less_than_case_count("D", 4)
        .greater_than_or_equal_case_count("E", 5)
        .less_than_or_equal_case_count("F", None);

    let mut counts = QueryBuilder::new();
    counts
        .count_equals("A", 1)
        .count_not_equals("B", 2)
        .count_greater_than("C", 3)
        .count_less_than("D", 4)
        .count_greater_than_or_equal("E", 5);

    assert_eq!(aliases, counts);
    assert_eq!(aliases.build(), "A #== 1 B #!= 2 C #> 3 D #< 4 E #>= 5");
}
