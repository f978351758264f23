//! Error types for query planning.

use thiserror::Error;
use widegraph_core::CoreError;

/// Errors that can occur while planning a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The predicate cannot be expressed in the store's query language.
    #[error("unsupported predicate: {0}")]
    UnsupportedPredicate(String),

    /// A core error, such as an id that does not fit the identity columns.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for query planning.
pub type QueryResult<T> = Result<T, QueryError>;
