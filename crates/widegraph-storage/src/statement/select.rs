//! Select statements.

use std::fmt;

use super::Clause;

/// Sort direction of an `ORDER BY` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The CQL keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One `ORDER BY` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    /// Column to order by.
    pub column: String,
    /// Direction.
    pub direction: SortDirection,
}

/// `SELECT * FROM <table> [WHERE ...] [ORDER BY ...] [LIMIT n]`.
///
/// Where clauses are conjoined. `Select` is `Clone`, so one base select can be
/// specialized into several statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    table: String,
    clauses: Vec<Clause>,
    orderings: Vec<Ordering>,
    limit: Option<u64>,
}

impl Select {
    /// Select every column of a table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), ..Self::default() }
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

    /// Add an `ORDER BY` entry.
    pub fn push_order(&mut self, column: impl Into<String>, direction: SortDirection) {
        self.orderings.push(Ordering { column: column.into(), direction });
    }

    /// Set the row limit.
    pub fn set_limit(&mut self, limit: u64) {
        self.limit = Some(limit);
    }

    /// The target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Where clauses as added; each may itself be a conjunction.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Every leaf restriction across all where clauses.
    #[must_use]
    pub fn restrictions(&self) -> Vec<&Clause> {
        self.clauses.iter().flat_map(Clause::conjuncts).collect()
    }

    /// `ORDER BY` entries.
    #[must_use]
    pub fn orderings(&self) -> &[Ordering] {
        &self.orderings
    }

    /// The row limit, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT * FROM {}", self.table)?;
        for (i, clause) in self.clauses.iter().enumerate() {
            f.write_str(if i == 0 { " WHERE " } else { " AND " })?;
            write!(f, "{clause}")?;
        }
        for (i, ordering) in self.orderings.iter().enumerate() {
            f.write_str(if i == 0 { " ORDER BY " } else { ", " })?;
            write!(f, "{} {}", ordering.column, ordering.direction.keyword())?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        f.write_str(";")
    }
}
