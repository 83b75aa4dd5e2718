//! DQL Core - A fluent builder for DQL query statements
//!
//! This crate accumulates the clauses of a DQL statement through chained
//! calls and renders them into one deterministic statement string. It does
//! not connect to, parse for, or validate against any engine.
//!
//! ```
//! use dql_core::{op, query, QueryBuilder};
//!
//! let dql = query()
//!     .select_count("party")
//!     .where_("state", op::EQUALS, "IL")?
//!     .where_("district", op::EQUALS, 12)?
//!     .group_by("party")
//!     .limit(200)?
//!     .to_dql()?;
//!
//! assert_eq!(
//!     dql,
//!     "SELECT COUNT(party) WHERE state='IL' AND district=12 GROUP BY party LIMIT 200"
//! );
//! # Ok::<(), dql_core::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod literal;
pub mod operator;

// Re-export main types
pub use builder::{cond, or, CountSelector, GroupItem, IntoFields, Query, QueryBuilder, WhereToken};
pub use error::{Error, Result};
pub use literal::{format_condition, IntoLiteral, Literal};
pub use operator::{op, IntoOperator, Operator};

/// Create a new, empty DQL query
pub fn query() -> Query {
    Query::new()
}
