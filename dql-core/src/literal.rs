//! Literal values and their DQL condition syntax

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Error, Operator, Result};

/// A typed value that can appear on the right side of a DQL condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// Rendered as bare decimal digits
    Integer(i64),
    /// Rendered single-quoted, verbatim
    Text(String),
    /// Rendered as `true` / `false`
    Boolean(bool),
}

impl Literal {
    /// Get the DQL type name for this literal
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Integer(_) => "integer",
            Literal::Text(_) => "text",
            Literal::Boolean(_) => "boolean",
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            // Embedded quotes are not escaped
            Literal::Text(s) => write!(f, "'{}'", s),
            Literal::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Render one `field<op><literal>` condition fragment
pub fn format_condition(field: &str, operator: Operator, value: &Literal) -> String {
    format!("{}{}{}", field, operator, value)
}

// Implement From for common types
impl From<bool> for Literal {
    fn from(val: bool) -> Self {
        Literal::Boolean(val)
    }
}

impl From<String> for Literal {
    fn from(val: String) -> Self {
        Literal::Text(val)
    }
}

impl From<&str> for Literal {
    fn from(val: &str) -> Self {
        Literal::Text(val.to_string())
    }
}

impl From<&String> for Literal {
    fn from(val: &String) -> Self {
        Literal::Text(val.clone())
    }
}

impl From<char> for Literal {
    fn from(val: char) -> Self {
        Literal::Text(val.to_string())
    }
}

macro_rules! integer_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(val: $ty) -> Self {
                    Literal::Integer(i64::from(val))
                }
            }

            impl IntoLiteral for $ty {
                fn into_literal(self) -> Result<Literal> {
                    Ok(self.into())
                }
            }
        )*
    };
}

macro_rules! checked_integer_literal {
    ($($ty:ty => $out_of_range:literal),*) => {
        $(
            impl IntoLiteral for $ty {
                fn into_literal(self) -> Result<Literal> {
                    i64::try_from(self)
                        .map(Literal::Integer)
                        .map_err(|_| unsupported($out_of_range))
                }
            }
        )*
    };
}

/// Trait for values accepted by `where_()` and `cond()`
///
/// Statically typed inputs convert, except wide integers beyond `i64`.
/// Dynamically typed inputs such as `serde_json::Value` are checked here.
/// Both fail with [`Error::UnsupportedLiteralType`].
pub trait IntoLiteral {
    fn into_literal(self) -> Result<Literal>;
}

integer_literal!(i8, i16, i32, i64, u8, u16, u32);

checked_integer_literal!(
    u64 => "unsigned integer out of range",
    usize => "unsigned integer out of range",
    isize => "integer out of range"
);

impl IntoLiteral for Literal {
    fn into_literal(self) -> Result<Literal> {
        Ok(self)
    }
}

impl IntoLiteral for bool {
    fn into_literal(self) -> Result<Literal> {
        Ok(self.into())
    }
}

impl IntoLiteral for &str {
    fn into_literal(self) -> Result<Literal> {
        Ok(self.into())
    }
}

impl IntoLiteral for String {
    fn into_literal(self) -> Result<Literal> {
        Ok(self.into())
    }
}

impl IntoLiteral for &String {
    fn into_literal(self) -> Result<Literal> {
        Ok(self.into())
    }
}

impl IntoLiteral for char {
    fn into_literal(self) -> Result<Literal> {
        Ok(self.into())
    }
}

impl<T> IntoLiteral for Option<T>
where
    T: IntoLiteral,
{
    fn into_literal(self) -> Result<Literal> {
        match self {
            Some(val) => val.into_literal(),
            None => Err(unsupported("null")),
        }
    }
}

impl IntoLiteral for serde_json::Value {
    fn into_literal(self) -> Result<Literal> {
        use serde_json::Value as Json;

        match self {
            Json::Bool(b) => Ok(Literal::Boolean(b)),
            Json::String(s) => Ok(Literal::Text(s)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Literal::Integer(i)),
                None if n.is_u64() => Err(unsupported("unsigned integer out of range")),
                None => Err(unsupported("float")),
            },
            Json::Null => Err(unsupported("null")),
            Json::Array(_) => Err(unsupported("array")),
            Json::Object(_) => Err(unsupported("object")),
        }
    }
}

impl TryFrom<serde_json::Value> for Literal {
    type Error = Error;

    fn try_from(val: serde_json::Value) -> Result<Self> {
        val.into_literal()
    }
}

fn unsupported(type_name: &str) -> Error {
    tracing::debug!(type_name, "rejected value without a DQL literal form");
    Error::unsupported_literal(type_name)
}
