//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A write or delete request carried neither keys nor cells.
    #[error("row {0} has no keys and no cells")]
    EmptyRow(String),

    /// A physical column name is not a known column key.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// An id could not be mapped onto the identity columns of a table.
    #[error("id '{id}' has {actual} part(s), but the layout expects {expected}")]
    InvalidId {
        /// The canonical id string.
        id: String,
        /// Number of identity columns.
        expected: usize,
        /// Number of parts found in the id.
        actual: usize,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_display() {
        let err = CoreError::InvalidId { id: "a".to_owned(), expected: 2, actual: 1 };
        let msg = err.to_string();
        assert!(msg.contains("'a'"));
        assert!(msg.contains("expects 2"));
    }
}
