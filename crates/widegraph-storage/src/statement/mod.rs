//! Physical statement model.
//!
//! Statements are built from [`Clause`]s and [`Literal`]s and render to CQL
//! text through `Display`:
//!
//! ```text
//! SELECT * FROM edges WHERE source_vertex = 'a' AND direction = 'OUT' LIMIT 500;
//! INSERT INTO vertices (label, primary_values) VALUES ('person', 'marko');
//! DELETE FROM vertices WHERE label = 'person' AND primary_values = 'marko';
//! BEGIN BATCH ... APPLY BATCH;
//! ```

mod clause;
mod literal;
mod mutation;
mod select;

use std::fmt;

pub use clause::{Clause, CompareOp};
pub use literal::Literal;
pub use mutation::{Batch, Delete, Insert};
pub use select::{Ordering, Select, SortDirection};

/// Any statement a [`Session`](crate::Session) can execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A select over one table.
    Select(Select),
    /// An upsert of one physical row.
    Insert(Insert),
    /// A delete of every physical row matching the clauses.
    Delete(Delete),
    /// Mutations applied as one atomic unit.
    Batch(Batch),
    /// Raw statement text, used for DDL.
    Raw(String),
}

impl Statement {
    /// Returns `true` for inserts and deletes.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Insert(_) | Self::Delete(_))
    }

    /// The table the statement targets, if it targets exactly one.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::Select(s) => Some(s.table()),
            Self::Insert(i) => Some(i.table()),
            Self::Delete(d) => Some(d.table()),
            Self::Batch(_) | Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::Insert(i) => write!(f, "{i}"),
            Self::Delete(d) => write!(f, "{d}"),
            Self::Batch(b) => write!(f, "{b}"),
            Self::Raw(sql) => f.write_str(sql),
        }
    }
}

impl From<Select> for Statement {
    fn from(select: Select) -> Self {
        Self::Select(select)
    }
}

impl From<Insert> for Statement {
    fn from(insert: Insert) -> Self {
        Self::Insert(insert)
    }
}

impl From<Delete> for Statement {
    fn from(delete: Delete) -> Self {
        Self::Delete(delete)
    }
}

impl From<Batch> for Statement {
    fn from(batch: Batch) -> Self {
        Self::Batch(batch)
    }
}
