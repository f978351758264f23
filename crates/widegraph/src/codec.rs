//! Conversion between logical elements and physical rows.
//!
//! An [`EntryCodec`] is bound to one entity kind and the physical table that
//! stores it. Decoding reads result rows into [`Entry`] values using the
//! kind's [`TableLayout`]; encoding turns [`Row`] requests into inserts and
//! deletes.
//!
//! # Deletion granularity
//!
//! | Request | Statements |
//! |---------|------------|
//! | no keys | one delete on the identity columns parsed from the row id |
//! | keys, and no cells or an `EXIST` cell | one delete on the key columns |
//! | keys and cells | one delete per cell, on the keys plus the cell key |

use widegraph_core::{CoreError, CoreResult, EntityKind, Entry, Property, Row};
use widegraph_storage::{Clause, Delete, Insert, ResultRow, ResultSet};

use crate::layout::{ColumnRole, TableLayout};

/// Encodes and decodes the elements of one table.
#[derive(Debug, Clone)]
pub struct EntryCodec {
    layout: &'static TableLayout,
    table: String,
}

impl EntryCodec {
    /// Create a codec for a kind stored in the given physical table.
    #[must_use]
    pub fn new(kind: EntityKind, table: impl Into<String>) -> Self {
        Self { layout: TableLayout::of(kind), table: table.into() }
    }

    /// The layout this codec follows.
    #[must_use]
    pub const fn layout(&self) -> &'static TableLayout {
        self.layout
    }

    /// The physical table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Decode one physical row.
    ///
    /// Null scalar and cell-key columns are skipped. A cell-key column is
    /// paired with its value column; a null value reads as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownColumn`] if the row carries a column the
    /// layout does not define.
    pub fn decode(&self, row: &ResultRow) -> CoreResult<Entry> {
        let mut entry = Entry::new(self.layout.kind);
        for (name, value) in row.cells() {
            let spec = self.layout.classify(name)?;
            let Some(value) = value else {
                continue;
            };
            match spec.role {
                ColumnRole::Scalar => entry.set_column(spec.key, value),
                ColumnRole::CellKey { value: value_key } => {
                    let cell_value = row.get(value_key.as_str()).unwrap_or_default();
                    entry.push_cell(Property::new(spec.key, value, value_key, cell_value));
                }
                ColumnRole::CellValue => {}
            }
        }
        Ok(entry)
    }

    /// Decode a result set and fold the rows into elements.
    ///
    /// # Errors
    ///
    /// Same as [`EntryCodec::decode`].
    pub fn decode_all(&self, rows: &ResultSet) -> CoreResult<Vec<Entry>> {
        let entries =
            rows.rows().iter().map(|row| self.decode(row)).collect::<CoreResult<Vec<_>>>()?;
        Ok(self.layout.merge_entries(entries))
    }

    /// Encode a write request into inserts.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyRow`] if the request has no keys and no cells
    /// - [`CoreError::UnknownColumn`] if a key or cell names a column the
    ///   layout does not define
    pub fn encode_insert(&self, row: &Row) -> CoreResult<Vec<Insert>> {
        row.ensure_not_empty()?;
        self.check_columns(row)?;

        let mut base = Insert::new(self.table.as_str());
        for (key, value) in &row.keys {
            base.set(key.as_str(), value.as_str());
        }
        if row.cells.is_empty() {
            return Ok(vec![base]);
        }

        Ok(row
            .cells
            .iter()
            .map(|cell| {
                base.clone()
                    .value(cell.name_key.as_str(), cell.name_value.as_str())
                    .value(cell.value_key.as_str(), cell.value_value.as_str())
            })
            .collect())
    }

    /// Encode a delete request.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyRow`] if the request has no keys and no cells
    /// - [`CoreError::InvalidId`] if the id does not fit the identity columns
    /// - [`CoreError::UnknownColumn`] as for [`EntryCodec::encode_insert`]
    pub fn encode_delete(&self, row: &Row) -> CoreResult<Vec<Delete>> {
        row.ensure_not_empty()?;

        if row.keys.is_empty() {
            let mut delete = Delete::new(self.table.as_str());
            for (column, value) in self.layout.id_layout().pairs(&row.id)? {
                delete.push_where(Clause::eq(column.as_str(), value));
            }
            return Ok(vec![delete]);
        }

        self.check_columns(row)?;
        let mut base = Delete::new(self.table.as_str());
        for (key, value) in &row.keys {
            base.push_where(Clause::eq(key.as_str(), value.as_str()));
        }
        if row.cells.is_empty() || row.has_exist() {
            return Ok(vec![base]);
        }

        Ok(row
            .cells
            .iter()
            .map(|cell| {
                base.clone().filter(Clause::eq(cell.name_key.as_str(), cell.name_value.as_str()))
            })
            .collect())
    }

    fn check_columns(&self, row: &Row) -> CoreResult<()> {
        let cell_columns = row.cells.iter().flat_map(|c| [c.name_key, c.value_key]);
        for key in row.keys.keys().copied().chain(cell_columns) {
            if self.layout.column(key).is_none() {
                return Err(CoreError::UnknownColumn(format!("{}.{key}", self.table)));
            }
        }
        Ok(())
    }
}
