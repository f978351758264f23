//! In-memory storage backend.
//!
//! [`MemorySession`] keeps every table in process and executes the same
//! statements a wide-column store would receive. It follows the store's
//! rules closely enough to exercise the table layer:
//!
//! - rows are keyed by their full primary key, so inserts are upserts
//! - clauses, orderings and inserted values must name defined columns
//! - inserts must set every primary-key column
//! - a batch is validated and applied all-or-nothing
//! - a closed session rejects every statement
//!
//! # Example
//!
//! ```
//! use widegraph_storage::backends::MemorySession;
//! use widegraph_storage::{Session, Statement, StorageError};
//!
//! let session = MemorySession::new();
//! session.close();
//! let err = session.execute(&Statement::Raw("DROP TABLE IF EXISTS t;".into())).unwrap_err();
//! assert_eq!(err, StorageError::SessionClosed);
//! ```

mod ddl;
mod table;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use tracing::trace;

use self::ddl::DdlCommand;
use self::table::MemoryTable;
use crate::engine::{ResultSet, Session, StorageError, StorageResult};
use crate::statement::Statement;

/// Tables and indexes held by a session.
#[derive(Debug, Clone, Default)]
struct MemoryState {
    tables: BTreeMap<String, MemoryTable>,
    /// Index name to `(table, column)`.
    indexes: BTreeMap<String, (String, String)>,
}

impl MemoryState {
    fn table(&self, name: &str) -> StorageResult<&MemoryTable> {
        self.tables
            .get(&name.to_lowercase())
            .ok_or_else(|| StorageError::TableNotFound(name.to_owned()))
    }

    fn table_mut(&mut self, name: &str) -> StorageResult<&mut MemoryTable> {
        self.tables
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| StorageError::TableNotFound(name.to_owned()))
    }

    fn apply_mutation(&mut self, statement: &Statement) -> StorageResult<()> {
        match statement {
            Statement::Insert(insert) => {
                let table = self.table_mut(insert.table())?;
                table.validate_insert(insert)?;
                table.apply_insert(insert);
                Ok(())
            }
            Statement::Delete(delete) => {
                let table = self.table_mut(delete.table())?;
                table.validate_delete(delete)?;
                let removed = table.apply_delete(delete);
                trace!(table = delete.table(), removed, "delete applied");
                Ok(())
            }
            other => Err(StorageError::InvalidQuery(format!(
                "only inserts and deletes may be batched: {other}"
            ))),
        }
    }

    fn apply_ddl(&mut self, command: DdlCommand) -> StorageResult<()> {
        match command {
            DdlCommand::CreateTable {
                name,
                if_not_exists,
                columns,
                partition_keys,
                clustering_keys,
            } => {
                if self.tables.contains_key(&name) {
                    if if_not_exists {
                        return Ok(());
                    }
                    return Err(StorageError::InvalidQuery(format!("table {name} already exists")));
                }
                let table =
                    MemoryTable::new(name.clone(), columns, partition_keys, clustering_keys)?;
                self.tables.insert(name, table);
                Ok(())
            }
            DdlCommand::CreateIndex { name, table, column } => {
                if self.indexes.contains_key(&name) {
                    return Err(StorageError::InvalidQuery(format!("index {name} already exists")));
                }
                let target = self.table(&table)?;
                if !target.has_column(&column) {
                    return Err(StorageError::InvalidQuery(format!(
                        "no column definition found for {column} in table {table}"
                    )));
                }
                if target.is_sole_partition_key(&column) {
                    return Err(StorageError::InvalidQuery(format!(
                        "cannot create secondary index on partition key column {column}"
                    )));
                }
                self.indexes.insert(name, (table, column));
                Ok(())
            }
            DdlCommand::DropTable { name, if_exists } => {
                if self.tables.remove(&name).is_none() && !if_exists {
                    return Err(StorageError::TableNotFound(name));
                }
                self.indexes.retain(|_, (table, _)| *table != name);
                Ok(())
            }
        }
    }
}

/// A session over in-process tables.
///
/// The session is safe to share across threads; statements are serialized
/// by an internal lock.
#[derive(Debug, Default)]
pub struct MemorySession {
    state: RwLock<MemoryState>,
    closed: AtomicBool,
}

impl MemorySession {
    /// Create an open session with no tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the session. Every later statement fails with
    /// [`StorageError::SessionClosed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    /// Names of the existing tables.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if the state lock is poisoned.
    pub fn table_names(&self) -> StorageResult<Vec<String>> {
        Ok(self.read()?.tables.keys().cloned().collect())
    }

    /// Names of the existing secondary indexes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if the state lock is poisoned.
    pub fn index_names(&self) -> StorageResult<Vec<String>> {
        Ok(self.read()?.indexes.keys().cloned().collect())
    }

    /// Number of physical rows stored in a table.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::TableNotFound`] if the table doesn't exist.
    pub fn row_count(&self, table: &str) -> StorageResult<usize> {
        Ok(self.read()?.table(table)?.len())
    }

    fn read(&self) -> StorageResult<std::sync::RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|e| StorageError::Internal(format!("failed to acquire state lock: {e}")))
    }

    fn write(&self) -> StorageResult<std::sync::RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|e| StorageError::Internal(format!("failed to acquire state lock: {e}")))
    }
}

impl Session for MemorySession {
    fn execute(&self, statement: &Statement) -> StorageResult<ResultSet> {
        if self.is_closed() {
            return Err(StorageError::SessionClosed);
        }
        trace!(%statement, "executing");

        match statement {
            Statement::Select(select) => {
                let state = self.read()?;
                let table = state.table(select.table())?;
                table.validate_select(select)?;
                Ok(table.select(select))
            }
            Statement::Insert(_) | Statement::Delete(_) => {
                self.write()?.apply_mutation(statement)?;
                Ok(ResultSet::empty())
            }
            Statement::Batch(batch) => {
                let mut state = self.write()?;
                let mut staged = state.clone();
                for member in batch.statements() {
                    staged.apply_mutation(member)?;
                }
                *state = staged;
                Ok(ResultSet::empty())
            }
            Statement::Raw(sql) => {
                let command = ddl::parse(sql)?;
                self.write()?.apply_ddl(command)?;
                Ok(ResultSet::empty())
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
