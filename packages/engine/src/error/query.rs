//! Query construction errors

use crate::config::ConfigurationError;

/// Result type for building matchers
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while turning a query into a matcher
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unknown operator '{operator}' at '{path}'")]
    UnknownOperator { path: String, operator: String },

    #[error("Invalid operand for {operator} at '{path}': {reason}")]
    InvalidOperand {
        path: String,
        operator: String,
        reason: String,
    },

    #[error("Unsupported match spec at '{path}': {reason}")]
    UnsupportedSpec { path: String, reason: String },

    #[error("Invalid $regexp pattern at '{path}': {reason}")]
    InvalidPattern { path: String, reason: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl QueryError {
    pub fn unknown_operator(path: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            path: path.into(),
            operator: operator.into(),
        }
    }

    pub fn invalid_operand(
        path: impl Into<String>,
        operator: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOperand {
            path: path.into(),
            operator: operator.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_spec(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedSpec {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
