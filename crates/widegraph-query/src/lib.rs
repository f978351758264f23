//! `WideGraph` Query
//!
//! This crate compiles backend-agnostic graph queries into select statements
//! for a wide-column store.
//!
//! # Overview
//!
//! A [`Query`] names the element ids to fetch, conjunctive property
//! [`Condition`]s, an ordering and a limit. The [`QueryPlanner`] turns it into
//! one or more [`Select`](widegraph_storage::Select) statements:
//!
//! - ids are fanned out according to the identity columns of the target table:
//!   one `IN` select for a single-column identity, one select per id for a
//!   composite identity
//! - conditions are translated by [`translate`] and appended to every select
//! - the limit is scaled by a fan-out factor because one element occupies many
//!   physical rows
//!
//! The store cannot express disjunctions or inequality, so `Or` conditions and
//! `Neq` relations fail with [`QueryError::UnsupportedPredicate`].
//!
//! # Example
//!
//! ```
//! use widegraph_core::{ColumnKey, Id, IdLayout, EntityKind};
//! use widegraph_query::{PlannerConfig, Query, QueryPlanner};
//!
//! let planner = QueryPlanner::new(
//!     "vertex_labels",
//!     IdLayout::new(vec![ColumnKey::Name]),
//!     PlannerConfig::default(),
//! );
//! let query = Query::new(EntityKind::VertexLabel)
//!     .with_id(Id::new("person"))
//!     .with_id(Id::new("software"))
//!     .with_limit(5);
//!
//! let selects = planner.plan(&query).unwrap();
//! assert_eq!(selects.len(), 1);
//! assert_eq!(
//!     selects[0].to_string(),
//!     "SELECT * FROM vertex_labels WHERE name IN ('person', 'software') LIMIT 500;"
//! );
//! ```
//!
//! # Modules
//!
//! - [`query`] - The abstract query model
//! - [`condition`] - Predicate trees
//! - [`translate`] - Condition to clause translation
//! - [`plan`] - Query to select planning

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod condition;
pub mod error;
pub mod plan;
pub mod query;
pub mod translate;

pub use condition::{Condition, RelationOp};
pub use error::{QueryError, QueryResult};
pub use plan::{PlannerConfig, QueryPlanner, DEFAULT_FAN_OUT_FACTOR};
pub use query::{Order, Query};
pub use translate::{translate, translate_all};
