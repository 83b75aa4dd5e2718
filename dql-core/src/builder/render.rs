//! DQL statement rendering

use crate::{Error, Result};

use super::{Query, QueryBuilder, WhereToken};

const AND: &str = " AND ";
const OR: &str = " OR ";

/// Join where-tokens left to right: AND between adjacent conditions, OR where
/// a disjunction sits between them.
///
/// Disjunctions without a condition on both sides are dropped, and a run of
/// them yields a single OR. Returns `None` when there are no conditions.
pub(crate) fn join_where_tokens(tokens: &[WhereToken]) -> Option<String> {
    let mut out = String::new();
    let mut any = false;
    let mut joiner = AND;

    for token in tokens {
        match token {
            WhereToken::Condition(fragment) => {
                if any {
                    out.push_str(joiner);
                }
                out.push_str(fragment);
                any = true;
                joiner = AND;
            }
            WhereToken::Disjunction => joiner = OR,
        }
    }

    any.then_some(out)
}

impl QueryBuilder for Query {
    fn to_dql(&self) -> Result<String> {
        let mut dql = String::new();

        // SELECT clause
        if let Some(field) = &self.select_distinct {
            dql.push_str("SELECT DISTINCT ");
            dql.push_str(field);
        } else if let Some(fields) = &self.select_fields {
            dql.push_str("SELECT ");
            dql.push_str(&fields.join(","));
        } else if let Some(count) = &self.select_count {
            dql.push_str("SELECT ");
            dql.push_str(&count.to_string());
        } else {
            tracing::debug!("rejected render without a select clause");
            return Err(Error::NoSelectClause);
        }

        // WHERE clause
        if let Some(conditions) = join_where_tokens(&self.where_tokens) {
            dql.push_str(" WHERE ");
            dql.push_str(&conditions);
        }

        // GROUP BY clause
        if let Some(field) = &self.group_by {
            dql.push_str(" GROUP BY ");
            dql.push_str(field);
        }

        // LIMIT clause
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            dql.push_str(&format!(" LIMIT {}", limit));
        }

        tracing::trace!(statement = %dql, "rendered DQL statement");
        Ok(dql)
    }

    fn clone_builder(&self) -> Self {
        self.clone()
    }
}
