//! Table handles.
//!
//! A [`Table`] ties together everything needed to read and write one entity
//! kind: the planner for its identity columns, the codec for its layout and
//! the schema manager for its physical table.
//!
//! # Example
//!
//! ```
//! use widegraph::{BackendConfig, Table};
//! use widegraph_core::{ColumnKey, EntityKind, Id, Property, Row};
//! use widegraph_query::Query;
//! use widegraph_storage::backends::MemorySession;
//!
//! let session = MemorySession::new();
//! let table = Table::new(EntityKind::Vertex, &BackendConfig::default());
//! table.init(&session).unwrap();
//!
//! let row = Row::new(Id::composite(["person", "marko"]))
//!     .with_key(ColumnKey::Label, "person")
//!     .with_key(ColumnKey::PrimaryValues, "marko")
//!     .with_cell(Property::new(ColumnKey::PropertyKey, "age", ColumnKey::PropertyValue, "29"));
//!
//! let mut batch = table.new_batch();
//! table.insert(&mut batch, &row).unwrap();
//! batch.commit(&session).unwrap();
//!
//! let query = Query::new(EntityKind::Vertex).with_id(Id::composite(["person", "marko"]));
//! let entries = table.query(&session, &query).unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].property("age"), Some("29"));
//! ```

use tracing::debug;
use widegraph_core::{EntityKind, Entry, Row};
use widegraph_query::{Query, QueryPlanner};
use widegraph_storage::{Session, Statement};

use crate::batch::MutationBatch;
use crate::codec::EntryCodec;
use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::layout::TableLayout;
use crate::schema::SchemaManager;

/// Read and write access to the table of one entity kind.
#[derive(Debug, Clone)]
pub struct Table {
    kind: EntityKind,
    planner: QueryPlanner,
    codec: EntryCodec,
    schema: SchemaManager,
}

impl Table {
    /// Create a handle for a kind.
    #[must_use]
    pub fn new(kind: EntityKind, config: &BackendConfig) -> Self {
        let layout = TableLayout::of(kind);
        let table = config.table_name(kind);
        Self {
            kind,
            planner: QueryPlanner::new(table.as_str(), layout.id_layout(), config.planner_config()),
            codec: EntryCodec::new(kind, table.as_str()),
            schema: SchemaManager::new(table, config.default_column_type),
        }
    }

    /// The entity kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The physical table name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.codec.table()
    }

    /// The codec for this table.
    #[must_use]
    pub const fn codec(&self) -> &EntryCodec {
        &self.codec
    }

    /// The schema manager for this table.
    #[must_use]
    pub const fn schema(&self) -> &SchemaManager {
        &self.schema
    }

    /// Run a query and decode the matching elements.
    ///
    /// Selects run one after another; their results are concatenated in
    /// statement order.
    ///
    /// # Errors
    ///
    /// - [`BackendError::PreconditionFailure`] if the query is for another kind
    /// - [`BackendError::UnsupportedPredicate`] if a condition uses `Or` or `Neq`
    /// - [`BackendError::Core`] if an id is malformed or a row cannot be decoded
    /// - [`BackendError::Storage`] if the store rejects a select
    pub fn query<S: Session + ?Sized>(&self, session: &S, query: &Query) -> BackendResult<Vec<Entry>> {
        if query.result_type != self.kind {
            return Err(BackendError::PreconditionFailure(format!(
                "query for {} issued against the {} table",
                query.result_type, self.kind
            )));
        }

        let mut entries = Vec::new();
        for select in self.planner.plan(query)? {
            let rows = session.execute(&Statement::Select(select))?;
            entries.extend(self.codec.decode_all(&rows)?);
        }
        debug!(table = %self.name(), entries = entries.len(), "query returned");
        Ok(entries)
    }

    /// Encode a write request into a batch.
    ///
    /// # Errors
    ///
    /// - [`BackendError::BatchTableMismatch`] if the batch is for another table
    /// - [`BackendError::Core`] if the row is empty or names unknown columns
    pub fn insert(&self, batch: &mut MutationBatch, row: &Row) -> BackendResult<()> {
        self.check_batch(batch)?;
        batch.extend(self.codec.encode_insert(row)?);
        Ok(())
    }

    /// Encode a delete request into a batch.
    ///
    /// # Errors
    ///
    /// - [`BackendError::BatchTableMismatch`] if the batch is for another table
    /// - [`BackendError::Core`] if the row is empty, names unknown columns or
    ///   has a malformed id
    pub fn delete(&self, batch: &mut MutationBatch, row: &Row) -> BackendResult<()> {
        self.check_batch(batch)?;
        batch.extend(self.codec.encode_delete(row)?);
        Ok(())
    }

    /// Create an empty batch bound to this table.
    #[must_use]
    pub fn new_batch(&self) -> MutationBatch {
        MutationBatch::new(self.name())
    }

    /// Create the table and its indexes.
    ///
    /// # Errors
    ///
    /// See [`SchemaManager::init`].
    pub fn init<S: Session + ?Sized>(&self, session: &S) -> BackendResult<()> {
        self.schema.init(session, self.kind)
    }

    /// Drop the table.
    ///
    /// # Errors
    ///
    /// See [`SchemaManager::clear`].
    pub fn clear<S: Session + ?Sized>(&self, session: &S) -> BackendResult<()> {
        self.schema.clear(session)
    }

    fn check_batch(&self, batch: &MutationBatch) -> BackendResult<()> {
        if batch.table() != self.name() {
            return Err(BackendError::BatchTableMismatch {
                batch: batch.table().to_owned(),
                table: self.name().to_owned(),
            });
        }
        Ok(())
    }
}
