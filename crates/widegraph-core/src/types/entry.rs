//! Decoded logical records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ColumnKey, EntityKind, Property};

/// A logical record decoded from one or more physical rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The kind of element this entry describes.
    pub kind: EntityKind,
    /// Identity column values.
    pub columns: BTreeMap<ColumnKey, String>,
    /// Decoded property cells.
    pub cells: Vec<Property>,
}

impl Entry {
    /// Create an empty entry of the given kind.
    #[must_use]
    pub fn new(kind: EntityKind) -> Self {
        Self { kind, columns: BTreeMap::new(), cells: Vec::new() }
    }

    /// Set an identity column value.
    pub fn set_column(&mut self, key: ColumnKey, value: impl Into<String>) {
        self.columns.insert(key, value.into());
    }

    /// Get an identity column value.
    #[must_use]
    pub fn column(&self, key: ColumnKey) -> Option<&str> {
        self.columns.get(&key).map(String::as_str)
    }

    /// Attach a property cell.
    pub fn push_cell(&mut self, cell: Property) {
        self.cells.push(cell);
    }

    /// Look up a property value by its key.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.cells.iter().find(|c| c.name_value == name).map(|c| c.value_value.as_str())
    }

    /// Returns `true` if both entries describe the same element.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.kind == other.kind && self.columns == other.columns
    }
}
