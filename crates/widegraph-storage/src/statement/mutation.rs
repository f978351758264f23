//! Insert, delete and batch statements.

use std::fmt;

use super::{Clause, Literal, Statement};

/// `INSERT INTO <table> (cols...) VALUES (vals...)`: an upsert of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: String,
    values: Vec<(String, Literal)>,
}

impl Insert {
    /// Start an insert into a table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), values: Vec::new() }
    }

    /// Set a column value (builder form).
    #[must_use]
    pub fn value(mut self, column: impl Into<String>, value: impl Into<Literal>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a column value, replacing an earlier value for the same column.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Literal>) {
        let column = column.into();
        let value = value.into();
        match self.values.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.values.push((column, value)),
        }
    }

    /// The target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Column values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[(String, Literal)] {
        &self.values
    }

    /// Get the value set for a column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Literal> {
        self.values.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {} (", self.table)?;
        for (i, (column, _)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(column)?;
        }
        f.write_str(") VALUES (")?;
        for (i, (_, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(");")
    }
}

/// `DELETE FROM <table> WHERE ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: String,
    clauses: Vec<Clause>,
}

impl Delete {
    /// Start a delete from a table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), clauses: Vec::new() }
    }

    /// Add a where clause (builder form).
    #[must_use]
    pub fn filter(mut self, clause: Clause) -> Self {
        self.push_where(clause);
        self
    }

    /// Add a where clause.
    pub fn push_where(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// The target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Where clauses.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Every leaf restriction across all where clauses.
    #[must_use]
    pub fn restrictions(&self) -> Vec<&Clause> {
        self.clauses.iter().flat_map(Clause::conjuncts).collect()
    }
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        for (i, clause) in self.clauses.iter().enumerate() {
            f.write_str(if i == 0 { " WHERE " } else { " AND " })?;
            write!(f, "{clause}")?;
        }
        f.write_str(";")
    }
}

/// A group of mutations submitted as one atomic unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    statements: Vec<Statement>,
}

impl Batch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch from statements.
    #[must_use]
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Append a statement.
    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    /// The statements, in submission order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BEGIN BATCH")?;
        for statement in &self.statements {
            write!(f, " {statement}")?;
        }
        f.write_str(" APPLY BATCH;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_renders_and_replaces() {
        let mut insert = Insert::new("vertices").value("label", "person");
        insert.set("primary_values", "marko");
        insert.set("label", "software");
        assert_eq!(
            insert.to_string(),
            "INSERT INTO vertices (label, primary_values) VALUES ('software', 'marko');"
        );
    }

    #[test]
    fn batch_renders_members() {
        let mut batch = Batch::new();
        batch.push(Insert::new("t").value("a", "1"));
        batch.push(Delete::new("t").filter(Clause::eq("a", "2")));
        assert_eq!(batch.len(), 2);
        assert_eq!(
            batch.to_string(),
            "BEGIN BATCH INSERT INTO t (a) VALUES ('1'); DELETE FROM t WHERE a = '2'; APPLY BATCH;"
        );
    }
}
