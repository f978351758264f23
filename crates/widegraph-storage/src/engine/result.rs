//! Rows returned by the store.

/// One physical row: column names paired with their string cell values.
///
/// A `None` cell means the column is unset in this row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultRow {
    cells: Vec<(String, Option<String>)>,
}

impl ResultRow {
    /// Create a row from ordered `(column, value)` cells.
    #[must_use]
    pub fn new(cells: Vec<(String, Option<String>)>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column name.
    ///
    /// Returns `None` if the column is absent or unset.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .and_then(|(_, value)| value.as_deref())
    }

    /// Iterate over `(column, value)` cells in column-definition order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Number of columns in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The rows returned by a statement, with their column definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultSet {
    /// An empty result, as returned by mutations and DDL.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result from column definitions and rows.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<ResultRow>) -> Self {
        Self { columns, rows }
    }

    /// Column definitions, in select order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The returned rows.
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultRow;
    type IntoIter = std::vec::IntoIter<ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_skips_unset_cells() {
        let row = ResultRow::new(vec![
            ("label".to_owned(), Some("person".to_owned())),
            ("property_key".to_owned(), None),
        ]);
        assert_eq!(row.get("label"), Some("person"));
        assert_eq!(row.get("LABEL"), Some("person"));
        assert_eq!(row.get("property_key"), None);
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.len(), 2);
    }
}
