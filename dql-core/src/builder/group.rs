//! Parenthesized condition groups

use crate::literal::{format_condition, IntoLiteral, Literal};
use crate::{Error, IntoOperator, Operator, Result};

use super::render::join_where_tokens;
use super::WhereToken;

/// One element passed to [`Query::group`](super::Query::group)
///
/// Groups are single-level: there is no variant for an already rendered
/// group, so a group cannot contain another group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupItem {
    Condition {
        field: String,
        operator: Operator,
        value: Literal,
    },
    Disjunction,
}

impl GroupItem {
    fn into_token(self) -> WhereToken {
        match self {
            GroupItem::Condition {
                field,
                operator,
                value,
            } => WhereToken::Condition(format_condition(&field, operator, &value)),
            GroupItem::Disjunction => WhereToken::Disjunction,
        }
    }
}

/// Build a condition for use inside a group
///
/// ```
/// use dql_core::{cond, op, or, query, QueryBuilder};
///
/// let q = query()
///     .select("id")
///     .group(vec![cond("a", op::EQUALS, 1)?, or(), cond("b", op::EQUALS, 2)?])?;
/// assert_eq!(q.to_dql()?, "SELECT id WHERE (a=1 OR b=2)");
/// # Ok::<(), dql_core::Error>(())
/// ```
pub fn cond<O, V>(field: &str, operator: O, value: V) -> Result<GroupItem>
where
    O: IntoOperator,
    V: IntoLiteral,
{
    Ok(GroupItem::Condition {
        field: field.to_string(),
        operator: operator.into_operator()?,
        value: value.into_literal()?,
    })
}

/// OR marker for use inside a group
pub fn or() -> GroupItem {
    GroupItem::Disjunction
}

/// Join the items of a group and wrap them in one pair of parentheses
pub(crate) fn assemble_group<I>(items: I) -> Result<String>
where
    I: IntoIterator<Item = GroupItem>,
{
    let tokens: Vec<WhereToken> = items.into_iter().map(GroupItem::into_token).collect();

    match join_where_tokens(&tokens) {
        Some(joined) => Ok(format!("({})", joined)),
        None => {
            tracing::debug!(items = tokens.len(), "rejected group without conditions");
            Err(Error::EmptyGroup)
        }
    }
}
