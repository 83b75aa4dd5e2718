//! Query builder module

pub mod group;
pub mod query;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::Result;

pub use group::{cond, or, GroupItem};
pub use query::{CountSelector, Query};

/// Core trait for DQL statement builders
pub trait QueryBuilder {
    /// Generate the DQL statement string
    fn to_dql(&self) -> Result<String>;

    /// Clone the builder (for branching a partially built query)
    fn clone_builder(&self) -> Self
    where
        Self: Sized;
}

/// One element of a WHERE clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhereToken {
    /// A rendered `field<op><literal>` fragment or a parenthesized group
    Condition(String),
    /// Join the neighbouring conditions with OR instead of AND
    Disjunction,
}

/// Field names accepted by `select()`: one name, or an ordered list of them
pub trait IntoFields {
    fn into_fields(self) -> Vec<String>;
}

impl IntoFields for &str {
    fn into_fields(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoFields for String {
    fn into_fields(self) -> Vec<String> {
        vec![self]
    }
}

impl<S: Into<String>> IntoFields for Vec<S> {
    fn into_fields(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>, const N: usize> IntoFields for [S; N] {
    fn into_fields(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: AsRef<str>> IntoFields for &[S] {
    fn into_fields(self) -> Vec<String> {
        self.iter().map(|field| field.as_ref().to_string()).collect()
    }
}
