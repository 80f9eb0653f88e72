//! Error types for fluentsql.

use thiserror::Error;

/// The main error type for builder and compiler operations.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A sub-query callback returned no query.
    #[error("Sub-query builder for alias '{alias}' returned no query")]
    MissingSubquery { alias: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query document could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueryError {
    /// Create a missing sub-query error for the given alias.
    pub fn missing_subquery(alias: impl Into<String>) -> Self {
        Self::MissingSubquery {
            alias: alias.into(),
        }
    }
}

/// Result type alias for fluentsql operations.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::missing_subquery("latest");
        assert_eq!(
            err.to_string(),
            "Sub-query builder for alias 'latest' returned no query"
        );
    }
}
