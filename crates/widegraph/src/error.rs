//! Error types for the table layer.
//!
//! This module provides the [`BackendError`] type returned by every table
//! operation, and the [`BackendResult`] alias.

use thiserror::Error;
use widegraph_core::CoreError;
use widegraph_query::QueryError;
use widegraph_storage::StorageError;

/// Errors that can occur when reading or writing graph element tables.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackendError {
    /// A query condition cannot be expressed in the store's query language.
    #[error("unsupported predicate: {0}")]
    UnsupportedPredicate(String),

    /// An operation was attempted in a state that does not allow it.
    #[error("precondition failed: {0}")]
    PreconditionFailure(String),

    /// The store rejected a committed batch.
    #[error("failed to commit {} statement(s): {source}", .statements.len())]
    ExecutionFailure {
        /// The rendered statements of the rejected batch.
        statements: Vec<String>,
        /// The store error.
        source: StorageError,
    },

    /// A table definition is malformed.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A batch bound to one table was handed to another table.
    #[error("batch for table '{batch}' cannot take statements for table '{table}'")]
    BatchTableMismatch {
        /// The table the batch is bound to.
        batch: String,
        /// The table that tried to write to it.
        table: String,
    },

    /// A core error, such as an empty row or an unknown column.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error outside of a batch commit.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<QueryError> for BackendError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::UnsupportedPredicate(msg) => Self::UnsupportedPredicate(msg),
            QueryError::Core(err) => Self::Core(err),
        }
    }
}

impl BackendError {
    /// Returns `true` if the error came from the store rather than from this layer.
    #[must_use]
    pub const fn is_storage_error(&self) -> bool {
        matches!(self, Self::ExecutionFailure { .. } | Self::Storage(_))
    }
}

/// Result type for table operations.
pub type BackendResult<T> = Result<T, BackendError>;
