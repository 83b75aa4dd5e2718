//! DQL comparison operators and conversions

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// DQL comparison operator
///
/// Aliases (`DOESNT_EQUAL`, `GREATER`, `LESS`, `UNLIKE`) are the same
/// constant as the operator they name, so they render byte-identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Operator(&'static str);

impl Operator {
    pub const EQUALS: Self = Operator("=");
    pub const NOT_EQUAL: Self = Operator("!=");
    pub const DOESNT_EQUAL: Self = Self::NOT_EQUAL;
    pub const GREATER_THAN: Self = Operator(">");
    pub const GREATER: Self = Self::GREATER_THAN;
    pub const GREATER_OR_EQUAL: Self = Operator(">=");
    pub const LESS_THAN: Self = Operator("<");
    pub const LESS: Self = Self::LESS_THAN;
    pub const LESS_OR_EQUAL: Self = Operator("<=");
    pub const LIKE: Self = Operator("~");
    pub const NOT_LIKE: Self = Operator("!~");
    pub const UNLIKE: Self = Self::NOT_LIKE;

    /// Every distinct operator symbol, aliases excluded
    pub const ALL: [Self; 8] = [
        Self::EQUALS,
        Self::NOT_EQUAL,
        Self::GREATER_THAN,
        Self::GREATER_OR_EQUAL,
        Self::LESS_THAN,
        Self::LESS_OR_EQUAL,
        Self::LIKE,
        Self::NOT_LIKE,
    ];

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.0.to_string()
    }
}

impl TryFrom<String> for Operator {
    type Error = Error;

    fn try_from(symbol: String) -> Result<Self> {
        symbol.as_str().into_operator()
    }
}

/// Trait for types that can be converted to DQL operators
pub trait IntoOperator {
    fn into_operator(self) -> Result<Operator>;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Result<Operator> {
        Ok(self)
    }
}

/// Allow the raw DQL symbols as operators
impl IntoOperator for &str {
    fn into_operator(self) -> Result<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == self)
            .ok_or_else(|| {
                tracing::debug!(symbol = self, "rejected unknown operator");
                Error::unknown_operator(self)
            })
    }
}

/// Convenience module for operator constants
pub mod op {
    use super::Operator;

    pub const EQUALS: Operator = Operator::EQUALS;
    pub const NOT_EQUAL: Operator = Operator::NOT_EQUAL;
    pub const DOESNT_EQUAL: Operator = Operator::DOESNT_EQUAL;
    pub const GREATER_THAN: Operator = Operator::GREATER_THAN;
    pub const GREATER: Operator = Operator::GREATER;
    pub const GREATER_OR_EQUAL: Operator = Operator::GREATER_OR_EQUAL;
    pub const LESS_THAN: Operator = Operator::LESS_THAN;
    pub const LESS: Operator = Operator::LESS;
    pub const LESS_OR_EQUAL: Operator = Operator::LESS_OR_EQUAL;
    pub const LIKE: Operator = Operator::LIKE;
    pub const NOT_LIKE: Operator = Operator::NOT_LIKE;
    pub const UNLIKE: Operator = Operator::UNLIKE;
}
