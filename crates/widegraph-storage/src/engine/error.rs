//! Storage error types.

use thiserror::Error;

/// Errors reported by a store session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The session has been closed.
    #[error("session has been closed")]
    SessionClosed,

    /// The store rejected a statement as malformed or unsatisfiable.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A table does not exist.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
