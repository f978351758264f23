//! Identifiers for graph elements and their mapping onto identity columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ColumnKey;
use crate::error::{CoreError, CoreResult};

/// Separator between the parts of a composite id.
///
/// The ASCII unit separator never appears in labels or serialized values.
pub const ID_SEPARATOR: char = '\u{1f}';

/// Escape prefix for a literal [`ID_SEPARATOR`] or `ID_ESCAPE` inside a part.
///
/// Escaping lets a composite id carry other composite ids as parts, such as
/// an edge id embedding the ids of its two vertices.
pub const ID_ESCAPE: char = '`';

/// Unique identifier of a graph element in its canonical string form.
///
/// Schema elements use a plain name. Vertices and edges use composite ids
/// whose parts line up with the identity columns of their table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(String);

impl Id {
    /// Create an id from its canonical string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a composite id by joining parts with [`ID_SEPARATOR`].
    ///
    /// Separators and escape characters inside a part are prefixed with
    /// [`ID_ESCAPE`], so [`Id::parts`] returns the parts unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use widegraph_core::Id;
    ///
    /// let marko = Id::composite(["person", "marko"]);
    /// let josh = Id::composite(["person", "josh"]);
    /// let edge = Id::composite([marko.as_str(), "OUT", "knows", "", josh.as_str()]);
    ///
    /// let parts = edge.parts();
    /// assert_eq!(parts.len(), 5);
    /// assert_eq!(parts[0], marko.as_str());
    /// assert_eq!(parts[4], josh.as_str());
    /// ```
    #[must_use]
    pub fn composite<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut id = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                id.push(ID_SEPARATOR);
            }
            for c in part.as_ref().chars() {
                if c == ID_SEPARATOR || c == ID_ESCAPE {
                    id.push(ID_ESCAPE);
                }
                id.push(c);
            }
        }
        Self(id)
    }

    /// The canonical string form.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a composite id into its unescaped parts.
    ///
    /// Only unescaped separators split. A trailing lone escape is kept as is.
    #[must_use]
    pub fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            match c {
                ID_ESCAPE => current.push(chars.next().unwrap_or(ID_ESCAPE)),
                ID_SEPARATOR => parts.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        parts.push(current);
        parts
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render separators visibly so ids stay readable in logs.
        for (i, part) in self.parts().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            f.write_str(&part.replace(ID_SEPARATOR, ":"))?;
        }
        Ok(())
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// The identity columns of a table, in primary-key order.
///
/// An id maps onto these columns: a single-column layout takes the whole id,
/// a composite layout takes one id part per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdLayout {
    columns: Vec<ColumnKey>,
}

impl IdLayout {
    /// Create a layout from identity columns.
    #[must_use]
    pub fn new(columns: impl Into<Vec<ColumnKey>>) -> Self {
        Self { columns: columns.into() }
    }

    /// The identity columns.
    #[must_use]
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Number of identity columns.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Map an id onto the identity column values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidId`] if a composite id has the wrong number
    /// of parts.
    pub fn values(&self, id: &Id) -> CoreResult<Vec<String>> {
        if self.columns.len() == 1 {
            return Ok(vec![id.as_str().to_owned()]);
        }
        let parts = id.parts();
        if parts.len() != self.columns.len() {
            return Err(CoreError::InvalidId {
                id: id.to_string(),
                expected: self.columns.len(),
                actual: parts.len(),
            });
        }
        Ok(parts)
    }

    /// Map an id onto `(column, value)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`IdLayout::values`].
    pub fn pairs(&self, id: &Id) -> CoreResult<Vec<(ColumnKey, String)>> {
        let values = self.values(id)?;
        Ok(self.columns.iter().copied().zip(values).collect())
    }
}
