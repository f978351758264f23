//! In-memory table state and statement evaluation.

use std::collections::BTreeMap;

use crate::engine::{ResultRow, ResultSet, StorageError, StorageResult};
use crate::statement::{Clause, Delete, Insert, Literal, Select, SortDirection};

/// Cells of one stored row, keyed by column name.
type StoredRow = BTreeMap<String, String>;

/// One table: its schema and rows keyed by primary-key values.
#[derive(Debug, Clone)]
pub(crate) struct MemoryTable {
    name: String,
    columns: Vec<String>,
    primary_key: Vec<String>,
    partition_len: usize,
    rows: BTreeMap<Vec<String>, StoredRow>,
}

impl MemoryTable {
    pub(crate) fn new(
        name: String,
        columns: Vec<String>,
        partition_keys: Vec<String>,
        clustering_keys: Vec<String>,
    ) -> StorageResult<Self> {
        let partition_len = partition_keys.len();
        let primary_key: Vec<String> = partition_keys.into_iter().chain(clustering_keys).collect();
        if let Some(missing) = primary_key.iter().find(|k| !columns.contains(k)) {
            return Err(StorageError::InvalidQuery(format!(
                "primary key column {missing} is not defined in table {name}"
            )));
        }
        Ok(Self { name, columns, primary_key, partition_len, rows: BTreeMap::new() })
    }

    pub(crate) fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Returns `true` if the column alone forms the partition key.
    pub(crate) fn is_sole_partition_key(&self, column: &str) -> bool {
        self.partition_len == 1 && self.primary_key.first().is_some_and(|k| k == column)
    }

    /// Number of stored rows.
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    fn check_column(&self, column: &str) -> StorageResult<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(StorageError::InvalidQuery(format!(
                "undefined column name {column} in table {}",
                self.name
            )))
        }
    }

    fn check_clauses<'a>(&self, clauses: impl IntoIterator<Item = &'a Clause>) -> StorageResult<()> {
        for clause in clauses {
            for column in clause.columns() {
                self.check_column(column)?;
            }
        }
        Ok(())
    }

    pub(crate) fn validate_insert(&self, insert: &Insert) -> StorageResult<()> {
        for (column, _) in insert.values() {
            self.check_column(column)?;
        }
        if let Some(missing) = self.primary_key.iter().find(|k| insert.get(k).is_none()) {
            return Err(StorageError::InvalidQuery(format!(
                "missing primary key column {missing} for table {}",
                self.name
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_delete(&self, delete: &Delete) -> StorageResult<()> {
        if delete.clauses().is_empty() {
            return Err(StorageError::InvalidQuery(format!(
                "delete from {} requires a where clause",
                self.name
            )));
        }
        self.check_clauses(delete.clauses())
    }

    pub(crate) fn validate_select(&self, select: &Select) -> StorageResult<()> {
        self.check_clauses(select.clauses())?;
        for ordering in select.orderings() {
            self.check_column(&ordering.column)?;
        }
        Ok(())
    }

    /// Upsert one row. Columns not named by the insert keep their old value.
    pub(crate) fn apply_insert(&mut self, insert: &Insert) {
        let key: Vec<String> = self
            .primary_key
            .iter()
            .map(|k| insert.get(k).map(Literal::to_cell).unwrap_or_default())
            .collect();
        let row = self.rows.entry(key).or_default();
        for (column, value) in insert.values() {
            row.insert(column.clone(), value.to_cell());
        }
    }

    /// Remove every row matching the delete's clauses; returns the count.
    pub(crate) fn apply_delete(&mut self, delete: &Delete) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !delete.clauses().iter().all(|c| matches(c, row)));
        before - self.rows.len()
    }

    pub(crate) fn select(&self, select: &Select) -> ResultSet {
        let mut matched: Vec<&StoredRow> = self
            .rows
            .values()
            .filter(|row| select.clauses().iter().all(|c| matches(c, row)))
            .collect();

        if !select.orderings().is_empty() {
            matched.sort_by(|a, b| {
                for ordering in select.orderings() {
                    let left = a.get(&ordering.column);
                    let right = b.get(&ordering.column);
                    let cmp = match ordering.direction {
                        SortDirection::Asc => left.cmp(&right),
                        SortDirection::Desc => right.cmp(&left),
                    };
                    if cmp.is_ne() {
                        return cmp;
                    }
                }
                std::cmp::Ordering::Equal
            });
        }

        let limit = select.limit().map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        let rows = matched
            .into_iter()
            .take(limit)
            .map(|row| {
                ResultRow::new(
                    self.columns.iter().map(|c| (c.clone(), row.get(c).cloned())).collect(),
                )
            })
            .collect();
        ResultSet::new(self.columns.clone(), rows)
    }
}

/// Evaluate a clause against a stored row. Unset cells never match.
fn matches(clause: &Clause, row: &StoredRow) -> bool {
    match clause {
        Clause::Compare { column, op, value } => row
            .get(column)
            .and_then(|cell| value.compare_cell(cell))
            .is_some_and(|ordering| op.accepts(ordering)),
        Clause::In { column, values } => row.get(column).is_some_and(|cell| {
            values.iter().any(|v| v.compare_cell(cell).is_some_and(std::cmp::Ordering::is_eq))
        }),
        Clause::And(operands) => operands.iter().all(|c| matches(c, row)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> MemoryTable {
        let mut table = MemoryTable::new(
            "people".to_owned(),
            vec!["name".to_owned(), "age".to_owned(), "city".to_owned()],
            vec!["name".to_owned()],
            vec![],
        )
        .unwrap();
        let people = [("alice", "30", "paris"), ("bob", "25", "rome"), ("carol", "41", "paris")];
        for (name, age, city) in people {
            let insert =
                Insert::new("people").value("name", name).value("age", age).value("city", city);
            table.apply_insert(&insert);
        }
        table
    }

    #[test]
    fn select_filters_orders_and_limits() {
        let table = people();
        let mut select = Select::new("people").filter(Clause::eq("city", "paris"));
        select.push_order("age", SortDirection::Desc);
        let result = table.select(&select);
        assert_eq!(result.len(), 2);
        assert_eq!(result.rows()[0].get("name"), Some("carol"));

        select.set_limit(1);
        assert_eq!(table.select(&select).len(), 1);
    }

    #[test]
    fn numeric_range_and_in() {
        let table = people();
        let older = table.select(&Select::new("people").filter(Clause::gt("age", 29i64)));
        assert_eq!(older.len(), 2);

        let select = Select::new("people").filter(Clause::in_list("name", ["bob", "zed"]));
        let some = table.select(&select);
        assert_eq!(some.len(), 1);
    }

    #[test]
    fn insert_upserts_by_primary_key() {
        let mut table = people();
        table.apply_insert(&Insert::new("people").value("name", "bob").value("age", "26"));
        assert_eq!(table.len(), 3);
        let bob = table.select(&Select::new("people").filter(Clause::eq("name", "bob")));
        assert_eq!(bob.rows()[0].get("age"), Some("26"));
        assert_eq!(bob.rows()[0].get("city"), Some("rome"));
    }

    #[test]
    fn delete_removes_matching_rows() {
        let mut table = people();
        let delete = Delete::new("people").filter(Clause::eq("city", "paris"));
        let removed = table.apply_delete(&delete);
        assert_eq!(removed, 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn validation_rejects_unknown_columns() {
        let table = people();
        let bad = Select::new("people").filter(Clause::eq("height", "1"));
        assert!(matches!(table.validate_select(&bad), Err(StorageError::InvalidQuery(_))));
        let no_key = Insert::new("people").value("age", "1");
        assert!(matches!(table.validate_insert(&no_key), Err(StorageError::InvalidQuery(_))));
    }
}
