//! Predicate trees.
//!
//! A [`Condition`] is a tree of relations combined with `And`/`Or`. The
//! planner only accepts conjunctions of `Eq`, `Gt`, `Gte`, `Lt` and `Lte`
//! relations; the remaining shapes exist so upstream components can express
//! them and receive a precise error.

use std::fmt;

use serde::{Deserialize, Serialize};
use widegraph_core::{ColumnKey, Value};

/// A relation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationOp {
    /// Equal.
    Eq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Not equal.
    Neq,
}

impl RelationOp {
    /// The operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Neq => "!=",
        }
    }
}

/// A predicate over element columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// `key <op> value`.
    Relation {
        /// The column the relation restricts.
        key: ColumnKey,
        /// The operator.
        op: RelationOp,
        /// The operand.
        value: Value,
    },
    /// Both sides hold.
    And(Box<Condition>, Box<Condition>),
    /// Either side holds.
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// `key <op> value`.
    #[must_use]
    pub fn relation(key: ColumnKey, op: RelationOp, value: impl Into<Value>) -> Self {
        Self::Relation { key, op, value: value.into() }
    }

    /// `key == value`.
    #[must_use]
    pub fn eq(key: ColumnKey, value: impl Into<Value>) -> Self {
        Self::relation(key, RelationOp::Eq, value)
    }

    /// `key > value`.
    #[must_use]
    pub fn gt(key: ColumnKey, value: impl Into<Value>) -> Self {
        Self::relation(key, RelationOp::Gt, value)
    }

    /// `key >= value`.
    #[must_use]
    pub fn gte(key: ColumnKey, value: impl Into<Value>) -> Self {
        Self::relation(key, RelationOp::Gte, value)
    }

    /// `key < value`.
    #[must_use]
    pub fn lt(key: ColumnKey, value: impl Into<Value>) -> Self {
        Self::relation(key, RelationOp::Lt, value)
    }

    /// `key <= value`.
    #[must_use]
    pub fn lte(key: ColumnKey, value: impl Into<Value>) -> Self {
        Self::relation(key, RelationOp::Lte, value)
    }

    /// `key != value`.
    #[must_use]
    pub fn neq(key: ColumnKey, value: impl Into<Value>) -> Self {
        Self::relation(key, RelationOp::Neq, value)
    }

    /// `left AND right`.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// `left OR right`.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relation { key, op, value } => write!(f, "{key} {} {value}", op.symbol()),
            Self::And(left, right) => write!(f, "({left} AND {right})"),
            Self::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nests() {
        let cond = Condition::or(
            Condition::eq(ColumnKey::Label, "person"),
            Condition::and(
                Condition::gt(ColumnKey::SortValues, 3i64),
                Condition::neq(ColumnKey::Direction, "IN"),
            ),
        );
        assert_eq!(
            cond.to_string(),
            "(label == person OR (sort_values > 3 AND direction != IN))"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let cond = Condition::and(
            Condition::eq(ColumnKey::Label, "person"),
            Condition::lte(ColumnKey::SortValues, 9i64),
        );
        let json = serde_json::to_string(&cond).unwrap();
        let back: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cond);
    }
}
