//! Error types for DQL statement building

use thiserror::Error;

/// The main error type for DQL builder operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rendering was attempted before any SELECT form was set
    #[error(
        "No select clause: call select(), select_distinct() or select_count() before rendering"
    )]
    NoSelectClause,

    /// A value that has no DQL literal form was passed as a condition value
    #[error("Unsupported literal type '{type_name}': expected integer, text or boolean")]
    UnsupportedLiteralType { type_name: String },

    /// A group was built without any conditions
    #[error("Cannot group zero conditions")]
    EmptyGroup,

    /// LIMIT must not be negative
    #[error("Invalid limit {limit}: must not be negative")]
    InvalidLimit { limit: i64 },

    /// Operator string outside the DQL vocabulary
    #[error("Unknown operator '{symbol}'")]
    UnknownOperator { symbol: String },

    /// A restored snapshot holds state no builder call can produce
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for DQL builder operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new unsupported literal type error
    pub fn unsupported_literal(type_name: impl Into<String>) -> Self {
        Self::UnsupportedLiteralType {
            type_name: type_name.into(),
        }
    }

    /// Create a new invalid limit error
    pub fn invalid_limit(limit: i64) -> Self {
        Self::InvalidLimit { limit }
    }

    /// Create a new invalid snapshot error
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }

    /// Create a new unknown operator error
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator {
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_select_clause_error() {
        let err = Error::NoSelectClause;
        assert!(err.to_string().starts_with("No select clause"));
    }

    #[test]
    fn test_unsupported_literal_error() {
        let err = Error::unsupported_literal("float");
        assert!(matches!(err, Error::UnsupportedLiteralType { .. }));
        assert_eq!(
            err.to_string(),
            "Unsupported literal type 'float': expected integer, text or boolean"
        );
    }

    #[test]
    fn test_invalid_limit_error() {
        let err = Error::invalid_limit(-1);
        assert!(matches!(err, Error::InvalidLimit { limit: -1 }));
        assert_eq!(err.to_string(), "Invalid limit -1: must not be negative");
    }

    #[test]
    fn test_unknown_operator_error() {
        let err = Error::unknown_operator("LIKE");
        assert!(matches!(err, Error::UnknownOperator { .. }));
        assert_eq!(err.to_string(), "Unknown operator 'LIKE'");
    }

    #[test]
    fn test_invalid_snapshot_error() {
        let err = Error::invalid_snapshot("empty WHERE condition");
        assert!(matches!(err, Error::InvalidSnapshot { .. }));
        assert_eq!(err.to_string(), "Invalid snapshot: empty WHERE condition");
    }

    #[test]
    fn test_empty_group_error() {
        assert_eq!(Error::EmptyGroup.to_string(), "Cannot group zero conditions");
    }
}
