//! The abstract query model.

use serde::{Deserialize, Serialize};
use widegraph_core::{ColumnKey, EntityKind, Id};

use crate::Condition;

/// Sort order of an ordering entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// A backend-agnostic query for graph elements of one kind.
///
/// - `ids`: elements to fetch; empty means every element
/// - `conditions`: conjunctive at the top level
/// - `orders`: applied in insertion order
/// - `limit`: `None` means no limit; counted in logical elements
/// - `offset`: advisory only, the store cannot skip rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// The kind of element to return.
    pub result_type: EntityKind,
    /// Element ids to fetch.
    pub ids: Vec<Id>,
    /// Top-level conditions, all of which must hold.
    pub conditions: Vec<Condition>,
    /// Ordering entries.
    pub orders: Vec<(ColumnKey, Order)>,
    /// Maximum number of elements.
    pub limit: Option<u64>,
    /// Number of elements to skip.
    pub offset: u64,
}

impl Query {
    /// A query for every element of a kind.
    #[must_use]
    pub fn new(result_type: EntityKind) -> Self {
        Self {
            result_type,
            ids: Vec::new(),
            conditions: Vec::new(),
            orders: Vec::new(),
            limit: None,
            offset: 0,
        }
    }

    /// Restrict to an id.
    #[must_use]
    pub fn with_id(mut self, id: Id) -> Self {
        self.ids.push(id);
        self
    }

    /// Restrict to several ids.
    #[must_use]
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = Id>) -> Self {
        self.ids.extend(ids);
        self
    }

    /// Add a condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Order by a column. Ordering an already ordered column replaces its
    /// direction and keeps its position.
    #[must_use]
    pub fn order_by(mut self, key: ColumnKey, order: Order) -> Self {
        match self.orders.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = order,
            None => self.orders.push((key, order)),
        }
        self
    }

    /// Limit the number of elements.
    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip elements. The planner ignores this.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reordering_keeps_position() {
        let query = Query::new(EntityKind::Edge)
            .order_by(ColumnKey::Label, Order::Asc)
            .order_by(ColumnKey::SortValues, Order::Asc)
            .order_by(ColumnKey::Label, Order::Desc);
        assert_eq!(
            query.orders,
            vec![(ColumnKey::Label, Order::Desc), (ColumnKey::SortValues, Order::Asc)]
        );
    }
}
