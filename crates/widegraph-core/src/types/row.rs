//! Write and delete requests.
//!
//! A [`Row`] names the identity columns of one logical element together with
//! the property cells to write or remove. Each [`Property`] is one
//! entity-attribute-value occurrence: it says which column carries the
//! property's key and which carries its value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ColumnKey, Id};
use crate::error::{CoreError, CoreResult};

/// Property key reserved for the identity-only sentinel.
const EXIST_KEY: &str = "~exist";

/// A single EAV-encoded property occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Property {
    /// Column holding the property key.
    pub name_key: ColumnKey,
    /// The serialized property key.
    pub name_value: String,
    /// Column holding the property value.
    pub value_key: ColumnKey,
    /// The serialized property value.
    pub value_value: String,
}

impl Property {
    /// Create a property occurrence.
    #[must_use]
    pub fn new(
        name_key: ColumnKey,
        name_value: impl Into<String>,
        value_key: ColumnKey,
        value_value: impl Into<String>,
    ) -> Self {
        Self { name_key, name_value: name_value.into(), value_key, value_value: value_value.into() }
    }

    /// The `EXIST` sentinel: the row carries its identity and no real property.
    ///
    /// Inserting it materializes an element without properties; a delete
    /// request containing it removes every physical row of the element.
    #[must_use]
    pub fn exist() -> Self {
        Self::new(ColumnKey::PropertyKey, EXIST_KEY, ColumnKey::PropertyValue, "")
    }

    /// Returns `true` if this is the `EXIST` sentinel.
    #[must_use]
    pub fn is_exist(&self) -> bool {
        self.name_key == ColumnKey::PropertyKey && self.name_value == EXIST_KEY
    }
}

/// A logical write or delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Identifier of the element.
    pub id: Id,
    /// Identity column values.
    pub keys: BTreeMap<ColumnKey, String>,
    /// Property cells, in caller order.
    pub cells: Vec<Property>,
}

impl Row {
    /// Create an empty request for an element.
    #[must_use]
    pub fn new(id: Id) -> Self {
        Self { id, keys: BTreeMap::new(), cells: Vec::new() }
    }

    /// Set an identity column value.
    #[must_use]
    pub fn with_key(mut self, key: ColumnKey, value: impl Into<String>) -> Self {
        self.keys.insert(key, value.into());
        self
    }

    /// Append a property cell.
    #[must_use]
    pub fn with_cell(mut self, cell: Property) -> Self {
        self.cells.push(cell);
        self
    }

    /// Returns `true` if any cell is the `EXIST` sentinel.
    #[must_use]
    pub fn has_exist(&self) -> bool {
        self.cells.iter().any(Property::is_exist)
    }

    /// Check that the request carries at least one key or cell.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyRow`] if both keys and cells are empty.
    pub fn ensure_not_empty(&self) -> CoreResult<()> {
        if self.keys.len() + self.cells.len() == 0 {
            return Err(CoreError::EmptyRow(self.id.to_string()));
        }
        Ok(())
    }
}
