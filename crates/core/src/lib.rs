// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qk-core: filter query builder and validator
//!
//! This crate provides the operator catalog, the token model, the fluent
//! [`QueryBuilder`] and the structural validator used by the qk CLI.
//!
//! ```
//! use qk_core::{validate_query, Connective, QueryBuilder};
//!
//! let mut status = QueryBuilder::new();
//! status.is_in("Status", ["active", "pending"]);
//!
//! let mut qb = QueryBuilder::new();
//! qb.greater_than("Age", 18).concat(&status, Connective::And);
//!
//! let query = qb.build();
//! assert_eq!(query, r#"Age > 18 && (Status ^^ ["active","pending"])"#);
//! assert!(validate_query(&query).is_valid());
//! ```

pub mod builder;
pub mod encode;
pub mod error;
pub mod operator;
pub mod token;
pub mod validate;
pub mod value;

pub use builder::{BuilderOptions, Fragment, QueryBuilder};
pub use encode::percent_encode;
pub use error::{Error, Result};
pub use operator::{ListOperator, Operator, OperatorFamily};
pub use token::{render_tokens, strip_filter_prefix, Connective, ParenKind, Token, FILTER_PREFIX};
pub use validate::{lex, validate_query, Lexeme, LexemeKind, ValidationError, ValidationResult};
pub use value::{IntoScalar, Scalar};
