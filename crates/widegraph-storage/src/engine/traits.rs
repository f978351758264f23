//! Core session trait.

use std::sync::Arc;

use super::{ResultSet, StorageResult};
use crate::statement::Statement;

/// A connection to a wide-column store.
///
/// The session is owned and lifecycle-managed by the caller. The table layer
/// treats it as a stateless execution channel and only checks
/// [`Session::is_closed`] before committing a batch.
///
/// # Example
///
/// ```ignore
/// use widegraph_storage::{Select, Session, StorageError};
///
/// fn count_rows<S: Session>(session: &S, table: &str) -> Result<usize, StorageError> {
///     let rows = session.execute(&Select::new(table).into())?;
///     Ok(rows.len())
/// }
/// ```
pub trait Session {
    /// Execute one statement.
    ///
    /// Mutations, batches and DDL return an empty [`ResultSet`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SessionClosed`](super::StorageError::SessionClosed)
    /// if the session is closed, or
    /// [`StorageError::InvalidQuery`](super::StorageError::InvalidQuery) if the
    /// store rejects the statement.
    fn execute(&self, statement: &Statement) -> StorageResult<ResultSet>;

    /// Check whether the session has been closed.
    fn is_closed(&self) -> bool;
}

/// Implement `Session` for references so handles can be passed around freely.
impl<S: Session + ?Sized> Session for &S {
    fn execute(&self, statement: &Statement) -> StorageResult<ResultSet> {
        (**self).execute(statement)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// Implement `Session` for `Arc<S>` to allow shared ownership of sessions.
impl<S: Session + ?Sized> Session for Arc<S> {
    fn execute(&self, statement: &Statement) -> StorageResult<ResultSet> {
        (**self).execute(statement)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}
