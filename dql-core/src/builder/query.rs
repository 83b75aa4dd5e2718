//! DQL query expression builder

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::literal::{format_condition, IntoLiteral};
use crate::{Error, IntoOperator, Result};

use super::group::{assemble_group, GroupItem};
use super::{IntoFields, WhereToken};

/// COUNT form of the SELECT clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountSelector {
    Count(String),
    CountDistinct(String),
}

impl Display for CountSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountSelector::Count(field) => write!(f, "COUNT({})", field),
            CountSelector::CountDistinct(field) => write!(f, "COUNT(DISTINCT {})", field),
        }
    }
}

/// Accumulated clauses of one DQL statement
///
/// The three SELECT forms are independent slots. When more than one is set,
/// SELECT DISTINCT wins over SELECT, which wins over SELECT COUNT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub(crate) select_fields: Option<Vec<String>>,
    pub(crate) select_distinct: Option<String>,
    pub(crate) select_count: Option<CountSelector>,
    pub(crate) where_tokens: Vec<WhereToken>,
    pub(crate) group_by: Option<String>,
    pub(crate) limit: Option<u64>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Select specific fields: `SELECT f1,f2,...`
    ///
    /// An empty field list leaves the slot unset.
    pub fn select<F>(mut self, fields: F) -> Self
    where
        F: IntoFields,
    {
        let fields = fields.into_fields();
        self.select_fields = if fields.is_empty() { None } else { Some(fields) };
        self
    }

    /// `SELECT DISTINCT field`
    pub fn select_distinct(mut self, field: &str) -> Self {
        self.select_distinct = Some(field.to_string());
        self
    }

    /// `SELECT COUNT(field)`
    pub fn select_count(mut self, field: &str) -> Self {
        self.select_count = Some(CountSelector::Count(field.to_string()));
        self
    }

    /// `SELECT COUNT(DISTINCT field)`
    pub fn select_count_distinct(mut self, field: &str) -> Self {
        self.select_count = Some(CountSelector::CountDistinct(field.to_string()));
        self
    }

    /// Add a WHERE condition, joined to the previous one with AND unless
    /// [`or`](Self::or) was called in between
    pub fn where_<O, V>(mut self, field: &str, operator: O, value: V) -> Result<Self>
    where
        O: IntoOperator,
        V: IntoLiteral,
    {
        let operator = operator.into_operator()?;
        let value = value.into_literal()?;

        self.where_tokens.push(WhereToken::Condition(format_condition(field, operator, &value)));
        Ok(self)
    }

    /// Join the previous and next WHERE conditions with OR
    pub fn or(mut self) -> Self {
        self.where_tokens.push(WhereToken::Disjunction);
        self
    }

    /// Add a parenthesized group of conditions as a single WHERE condition
    pub fn group<I>(mut self, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = GroupItem>,
    {
        let fragment = assemble_group(items)?;
        self.where_tokens.push(WhereToken::Condition(fragment));
        Ok(self)
    }

    /// `GROUP BY field`
    pub fn group_by(mut self, field: &str) -> Self {
        self.group_by = Some(field.to_string());
        self
    }

    /// `LIMIT n`; zero removes the clause
    pub fn limit(mut self, count: i64) -> Result<Self> {
        let count = u64::try_from(count).map_err(|_| {
            tracing::debug!(limit = count, "rejected negative limit");
            Error::invalid_limit(count)
        })?;

        self.limit = (count > 0).then_some(count);
        Ok(self)
    }

    /// The WHERE tokens in call order
    pub fn where_tokens(&self) -> &[WhereToken] {
        &self.where_tokens
    }

    /// Snapshot the builder state as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a builder from a [`to_json`](Self::to_json) snapshot
    ///
    /// The restored state is normalized the way the setters leave it: an
    /// empty field list or a zero limit counts as unset. Blank WHERE
    /// conditions are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut query: Self = serde_json::from_str(json)?;

        if query.select_fields.as_ref().is_some_and(|fields| fields.is_empty()) {
            query.select_fields = None;
        }
        if query.limit == Some(0) {
            query.limit = None;
        }

        let blank = query.where_tokens.iter().any(|token| {
            matches!(token, WhereToken::Condition(text) if text.trim().is_empty())
        });
        if blank {
            tracing::debug!("rejected snapshot with a blank WHERE condition");
            return Err(Error::invalid_snapshot("blank WHERE condition"));
        }

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::group::{cond, or, GroupItem};
    use crate::{op, QueryBuilder};

    #[test]
    fn test_new_query_is_empty() {
        let query = Query::new();
        assert_eq!(query, Query::default());
        assert!(query.where_tokens().is_empty());
    }

    #[test]
    fn test_select_fields() {
        let query = Query::new().select(["a", "b"]);
        assert_eq!(query.select_fields, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_empty_select_leaves_slot_unset() {
        let query = Query::new().select(Vec::<String>::new());
        assert_eq!(query.select_fields, None);
    }

    #[test]
    fn test_count_forms_share_a_slot() {
        let query = Query::new().select_count("p").select_count_distinct("q");
        assert_eq!(query.select_count, Some(CountSelector::CountDistinct("q".to_string())));
        assert_eq!(query.select_count.unwrap().to_string(), "COUNT(DISTINCT q)");
    }

    #[test]
    fn test_where_tokens_in_call_order() {
        let query = Query::new()
            .where_("a", op::EQUALS, 1)
            .unwrap()
            .or()
            .group(vec![
                cond("b", op::EQUALS, 2).unwrap(),
                or(),
                cond("c", op::EQUALS, 3).unwrap(),
            ])
            .unwrap();

        assert_eq!(
            query.where_tokens(),
            &[
                WhereToken::Condition("a=1".to_string()),
                WhereToken::Disjunction,
                WhereToken::Condition("(b=2 OR c=3)".to_string()),
            ]
        );
    }

    #[test]
    fn test_where_rejects_unsupported_value() {
        let err = Query::new()
            .where_("ratio", op::GREATER, serde_json::json!(0.5))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedLiteralType { .. }));
    }

    #[test]
    fn test_empty_group_is_rejected_immediately() {
        let err = Query::new().group(Vec::<GroupItem>::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyGroup));
    }

    #[test]
    fn test_limit() {
        assert_eq!(Query::new().limit(200).unwrap().limit, Some(200));
        assert_eq!(Query::new().limit(0).unwrap().limit, None);
        assert_eq!(Query::new().limit(5).unwrap().limit(0).unwrap().limit, None);

        let err = Query::new().limit(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidLimit { limit: -1 }));
    }

    #[test]
    fn test_last_write_wins() {
        let query = Query::new()
            .group_by("a")
            .group_by("b")
            .limit(1)
            .unwrap()
            .limit(9)
            .unwrap();
        assert_eq!(query.group_by.as_deref(), Some("b"));
        assert_eq!(query.limit, Some(9));
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let query = Query::new()
            .select_distinct("party")
            .where_("state", op::EQUALS, "IL")
            .unwrap()
            .or()
            .where_("district", op::EQUALS, 12)
            .unwrap()
            .limit(5)
            .unwrap();

        let restored = Query::from_json(&query.to_json().unwrap()).unwrap();
        assert_eq!(restored, query);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Query::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_json_normalizes_like_setters() {
        let restored =
            Query::from_json(r#"{"select_fields":[],"where_tokens":[],"limit":0}"#).unwrap();
        assert_eq!(restored, Query::new().select(Vec::<String>::new()));
        assert_eq!(restored.select_fields, None);
        assert_eq!(restored.limit, None);
        assert!(matches!(restored.to_dql().unwrap_err(), Error::NoSelectClause));

        let restored = Query::from_json(
            r#"{"select_fields":["a"],"select_distinct":null,"select_count":null,
                "where_tokens":[],"group_by":null,"limit":0}"#,
        )
        .unwrap();
        assert_eq!(restored.to_dql().unwrap(), "SELECT a");
    }

    #[test]
    fn test_from_json_rejects_blank_condition() {
        let err = Query::from_json(
            r#"{"select_distinct":"a","where_tokens":[{"Condition":""}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot { .. }));

        let err = Query::from_json(
            r#"{"select_distinct":"a","where_tokens":["Disjunction",{"Condition":"  "}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot { .. }));
    }
}
