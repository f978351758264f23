//! Write batching.
//!
//! A [`MutationBatch`] collects the inserts and deletes produced for one
//! table and submits them to the store as a single atomic batch.
//!
//! # Lifecycle
//!
//! 1. Statements are appended with [`MutationBatch::add`]; nothing is sent.
//! 2. [`MutationBatch::commit`] checks that the session is open, submits
//!    every pending statement as one batch, and clears the batch on success.
//! 3. On failure the batch keeps its statements, so the caller can inspect
//!    them, retry the commit or [`clear`](MutationBatch::clear) it.
//!
//! The batch is owned by its caller and mutated through `&mut`, so it can
//! never be shared between concurrent writers.

use tracing::{debug, error};
use widegraph_storage::{Batch, Session, Statement};

use crate::error::{BackendError, BackendResult};

/// Pending mutations for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationBatch {
    table: String,
    statements: Vec<Statement>,
}

impl MutationBatch {
    /// Create an empty batch bound to a table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), statements: Vec::new() }
    }

    /// The table this batch is bound to.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Append a statement.
    pub fn add(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    /// Append several statements.
    pub fn extend<I, S>(&mut self, statements: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Statement>,
    {
        self.statements.extend(statements.into_iter().map(Into::into));
    }

    /// Number of pending statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Returns `true` if there are uncommitted statements.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        !self.is_empty()
    }

    /// Pending statements in submission order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Discard every pending statement.
    pub fn clear(&mut self) {
        self.statements.clear();
    }

    /// Submit pending statements as one atomic batch.
    ///
    /// An empty batch commits without contacting the store.
    ///
    /// # Errors
    ///
    /// - [`BackendError::PreconditionFailure`] if the session is closed
    /// - [`BackendError::ExecutionFailure`] if the store rejects the batch;
    ///   the pending statements are kept
    pub fn commit<S: Session + ?Sized>(&mut self, session: &S) -> BackendResult<()> {
        if session.is_closed() {
            return Err(BackendError::PreconditionFailure(format!(
                "session is closed, cannot commit {} statement(s) for table {}",
                self.statements.len(),
                self.table
            )));
        }
        if self.statements.is_empty() {
            return Ok(());
        }

        let statement = Statement::Batch(Batch::from_statements(self.statements.clone()));
        debug!(table = %self.table, statements = self.statements.len(), %statement, "committing batch");

        match session.execute(&statement) {
            Ok(_) => {
                self.statements.clear();
                Ok(())
            }
            Err(source) => {
                let statements: Vec<String> =
                    self.statements.iter().map(ToString::to_string).collect();
                error!(table = %self.table, error = %source, ?statements, "batch commit failed");
                Err(BackendError::ExecutionFailure { statements, source })
            }
        }
    }
}
