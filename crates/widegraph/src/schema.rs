//! Table creation and removal.
//!
//! A [`TableDefinition`] describes one table and renders its
//! `CREATE TABLE` statement. A [`SchemaManager`] executes schema statements
//! for one physical table:
//!
//! ```text
//! CREATE TABLE IF NOT EXISTS <table>(<col> <type>, ..., PRIMARY KEY((<partition>), <clustering>, ...));
//! CREATE INDEX <name> ON <table>(<col>);
//! DROP TABLE IF EXISTS <table>;
//! ```

use tracing::info;
use widegraph_core::EntityKind;
use widegraph_storage::{Session, Statement};

use crate::config::ColumnType;
use crate::error::{BackendError, BackendResult};
use crate::layout::TableLayout;

/// The shape of a table to create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableDefinition {
    table: String,
    columns: Vec<String>,
    column_types: Option<Vec<ColumnType>>,
    partition_keys: Vec<String>,
    clustering_keys: Vec<String>,
}

impl TableDefinition {
    /// Start a definition for a table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), ..Self::default() }
    }

    /// The definition of a kind's table under the given physical name.
    #[must_use]
    pub fn for_layout(layout: &TableLayout, table: impl Into<String>) -> Self {
        Self::new(table)
            .with_columns(layout.columns.iter().map(|c| c.key.as_str()))
            .with_partition_keys(layout.partition_keys.iter().map(|k| k.as_str()))
            .with_clustering_keys(layout.clustering_keys.iter().map(|k| k.as_str()))
    }

    /// Add columns.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Give every column an explicit type, in column order.
    #[must_use]
    pub fn with_column_types(mut self, types: impl Into<Vec<ColumnType>>) -> Self {
        self.column_types = Some(types.into());
        self
    }

    /// Set the primary key: the first column is the partition key, the rest
    /// are clustering keys in order.
    #[must_use]
    pub fn with_primary_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys = keys.into_iter().map(Into::into);
        self.partition_keys = keys.next().into_iter().collect();
        self.clustering_keys = keys.collect();
        self
    }

    /// Set the partition key columns.
    #[must_use]
    pub fn with_partition_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the clustering key columns.
    #[must_use]
    pub fn with_clustering_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clustering_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// The table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Check that the definition can be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidSchema`] if the table has no columns or
    /// no partition key, if explicit types do not match the columns, or if a
    /// key is not one of the columns.
    pub fn validate(&self) -> BackendResult<()> {
        if self.columns.is_empty() {
            return Err(self.invalid("no columns"));
        }
        if self.partition_keys.is_empty() {
            return Err(self.invalid("no partition key"));
        }
        if let Some(types) = &self.column_types {
            if types.len() != self.columns.len() {
                return Err(self.invalid(&format!(
                    "{} column type(s) for {} column(s)",
                    types.len(),
                    self.columns.len()
                )));
            }
        }
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(column) {
                return Err(self.invalid(&format!("duplicate column {column}")));
            }
        }
        let keys = self.partition_keys.iter().chain(&self.clustering_keys);
        for key in keys {
            if !self.columns.contains(key) {
                return Err(self.invalid(&format!("primary key {key} is not a column")));
            }
        }
        Ok(())
    }

    /// Render the `CREATE TABLE IF NOT EXISTS` statement.
    ///
    /// # Errors
    ///
    /// Same as [`TableDefinition::validate`].
    pub fn create_statement(&self, default_type: ColumnType) -> BackendResult<String> {
        self.validate()?;

        let columns: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let column_type = self
                    .column_types
                    .as_ref()
                    .and_then(|types| types.get(i).copied())
                    .unwrap_or(default_type);
                format!("{column} {column_type}")
            })
            .collect();
        let primary_key: Vec<String> = std::iter::once(format!("({})", self.partition_keys.join(", ")))
            .chain(self.clustering_keys.iter().cloned())
            .collect();

        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {}({}, PRIMARY KEY({}));",
            self.table,
            columns.join(", "),
            primary_key.join(", ")
        ))
    }

    fn invalid(&self, reason: &str) -> BackendError {
        BackendError::InvalidSchema(format!("table {}: {reason}", self.table))
    }
}

/// Executes schema statements for one physical table.
#[derive(Debug, Clone)]
pub struct SchemaManager {
    table: String,
    default_column_type: ColumnType,
}

impl SchemaManager {
    /// Create a manager for a table.
    #[must_use]
    pub fn new(table: impl Into<String>, default_column_type: ColumnType) -> Self {
        Self { table: table.into(), default_column_type }
    }

    /// The managed table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The conventional name of an index on a column of this table.
    #[must_use]
    pub fn index_name(&self, column: &str) -> String {
        format!("{}_{column}_index", self.table)
    }

    /// Create a table if it does not exist.
    ///
    /// # Errors
    ///
    /// - [`BackendError::InvalidSchema`] if the definition is malformed
    /// - [`BackendError::Storage`] if the store rejects the statement
    pub fn create_table<S: Session + ?Sized>(
        &self,
        session: &S,
        definition: &TableDefinition,
    ) -> BackendResult<()> {
        let cql = definition.create_statement(self.default_column_type)?;
        self.run(session, cql)
    }

    /// Create a single-column secondary index.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Storage`] if the store rejects the statement.
    pub fn create_index<S: Session + ?Sized>(
        &self,
        session: &S,
        name: &str,
        column: &str,
    ) -> BackendResult<()> {
        self.run(session, format!("CREATE INDEX {name} ON {}({column});", self.table))
    }

    /// Drop the table if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Storage`] if the store rejects the statement.
    pub fn drop_table<S: Session + ?Sized>(&self, session: &S) -> BackendResult<()> {
        self.run(session, format!("DROP TABLE IF EXISTS {};", self.table))
    }

    /// Create a kind's table and its secondary indexes.
    ///
    /// # Errors
    ///
    /// Same as [`SchemaManager::create_table`] and [`SchemaManager::create_index`].
    pub fn init<S: Session + ?Sized>(&self, session: &S, kind: EntityKind) -> BackendResult<()> {
        let layout = TableLayout::of(kind);
        self.create_table(session, &TableDefinition::for_layout(layout, self.table.as_str()))?;
        for column in layout.indexes {
            self.create_index(session, &self.index_name(column.as_str()), column.as_str())?;
        }
        Ok(())
    }

    /// Drop the table.
    ///
    /// # Errors
    ///
    /// Same as [`SchemaManager::drop_table`].
    pub fn clear<S: Session + ?Sized>(&self, session: &S) -> BackendResult<()> {
        self.drop_table(session)
    }

    fn run<S: Session + ?Sized>(&self, session: &S, cql: String) -> BackendResult<()> {
        info!(table = %self.table, %cql, "executing schema statement");
        session.execute(&Statement::Raw(cql))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_composite_primary_key() {
        let definition = TableDefinition::new("vertices")
            .with_columns(["label", "primary_values", "property_key", "property_value"])
            .with_primary_keys(["label", "primary_values", "property_key"]);
        assert_eq!(
            definition.create_statement(ColumnType::Text).unwrap(),
            "CREATE TABLE IF NOT EXISTS vertices(label text, primary_values text, \
             property_key text, property_value text, \
             PRIMARY KEY((label), primary_values, property_key));"
        );
    }

    #[test]
    fn renders_explicit_types_and_multi_column_partition() {
        let definition = TableDefinition::new("t")
            .with_columns(["a", "b", "c"])
            .with_column_types([ColumnType::Text, ColumnType::Bigint, ColumnType::Boolean])
            .with_partition_keys(["a", "b"])
            .with_clustering_keys(["c"]);
        assert_eq!(
            definition.create_statement(ColumnType::Text).unwrap(),
            "CREATE TABLE IF NOT EXISTS t(a text, b bigint, c boolean, PRIMARY KEY((a, b), c));"
        );
    }

    #[test]
    fn default_type_applies_without_explicit_types() {
        let definition = TableDefinition::new("t").with_columns(["a"]).with_primary_keys(["a"]);
        assert_eq!(
            definition.create_statement(ColumnType::Blob).unwrap(),
            "CREATE TABLE IF NOT EXISTS t(a blob, PRIMARY KEY((a)));"
        );
    }

    #[test]
    fn invalid_definitions() {
        let no_columns = TableDefinition::new("t").with_primary_keys(["a"]);
        let no_key = TableDefinition::new("t").with_columns(["a"]);
        let bad_types = TableDefinition::new("t")
            .with_columns(["a", "b"])
            .with_column_types([ColumnType::Text])
            .with_primary_keys(["a"]);
        let foreign_key = TableDefinition::new("t").with_columns(["a"]).with_primary_keys(["a", "z"]);

        for definition in [no_columns, no_key, bad_types, foreign_key] {
            assert!(matches!(definition.validate(), Err(BackendError::InvalidSchema(_))));
        }
    }

    #[test]
    fn layout_definitions_are_valid() {
        for kind in EntityKind::ALL {
            let layout = TableLayout::of(kind);
            TableDefinition::for_layout(layout, layout.table).validate().unwrap();
        }
    }
}
