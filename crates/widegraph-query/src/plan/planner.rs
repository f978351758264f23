//! The query planner.

use tracing::{debug, warn};
use widegraph_core::{Id, IdLayout};
use widegraph_storage::{Clause, Select, SortDirection};

use super::PlannerConfig;
use crate::error::QueryResult;
use crate::query::{Order, Query};
use crate::translate::translate_all;

/// Compiles queries against one table into select statements.
///
/// The planner is immutable and can be shared; planning a query has no side
/// effects besides logging.
#[derive(Debug, Clone)]
pub struct QueryPlanner {
    table: String,
    layout: IdLayout,
    config: PlannerConfig,
}

impl QueryPlanner {
    /// Create a planner for a table with the given identity columns.
    #[must_use]
    pub fn new(table: impl Into<String>, layout: IdLayout, config: PlannerConfig) -> Self {
        Self { table: table.into(), layout, config }
    }

    /// The target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The identity columns ids are mapped onto.
    #[must_use]
    pub const fn layout(&self) -> &IdLayout {
        &self.layout
    }

    /// Compile a query into selects, in execution order.
    ///
    /// # Errors
    ///
    /// - [`QueryError::UnsupportedPredicate`](crate::QueryError::UnsupportedPredicate)
    ///   if a condition contains `Or` or `Neq`
    /// - [`QueryError::Core`](crate::QueryError::Core) if an id does not fit
    ///   the identity columns
    pub fn plan(&self, query: &Query) -> QueryResult<Vec<Select>> {
        let conditions = translate_all(&query.conditions)?;

        let mut base = Select::new(self.table.as_str());
        if let Some(limit) = query.limit {
            base.set_limit(self.config.physical_limit(limit));
        }
        if query.offset != 0 {
            warn!(
                table = %self.table,
                offset = query.offset,
                "offset is not supported by the store and is ignored"
            );
        }
        for (key, order) in &query.orders {
            let direction = match order {
                Order::Asc => SortDirection::Asc,
                Order::Desc => SortDirection::Desc,
            };
            base.push_order(key.as_str(), direction);
        }

        let mut selects = self.fan_out(base, &query.ids)?;
        if let Some(clause) = conditions {
            for select in &mut selects {
                select.push_where(clause.clone());
            }
        }

        debug!(
            table = %self.table,
            statements = selects.len(),
            plan = ?selects.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "planned query"
        );
        Ok(selects)
    }

    fn fan_out(&self, base: Select, ids: &[Id]) -> QueryResult<Vec<Select>> {
        if ids.is_empty() {
            return Ok(vec![base]);
        }

        if let [column] = self.layout.columns() {
            let values = ids.iter().map(Id::as_str);
            return Ok(vec![base.filter(Clause::in_list(column.as_str(), values))]);
        }

        let mut selects = Vec::with_capacity(ids.len());
        for id in ids {
            let mut select = base.clone();
            for (column, value) in self.layout.pairs(id)? {
                select.push_where(Clause::eq(column.as_str(), value));
            }
            selects.push(select);
        }
        Ok(selects)
    }
}
