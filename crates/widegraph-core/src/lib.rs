//! `WideGraph` Core
//!
//! This crate provides the value types shared by every layer of `WideGraph`:
//! the planner that compiles graph queries into wide-column selects, the codec
//! that flattens graph elements into row-per-property tables, and the storage
//! interface that executes the resulting statements.
//!
//! # Overview
//!
//! - **Identifiers**: [`Id`] and [`IdLayout`] for mapping ids onto identity columns
//! - **Values**: [`Value`] is a closed, tagged set of condition operands
//! - **Columns**: [`ColumnKey`] names every physical column the layer knows
//! - **Kinds**: [`EntityKind`] tags which graph element a table stores
//! - **Requests**: [`Row`] and [`Property`] describe writes and deletes
//! - **Results**: [`Entry`] is a decoded logical record
//!
//! # Example
//!
//! ```
//! use widegraph_core::{ColumnKey, Id, Property, Row};
//!
//! let id = Id::composite(["person", "marko"]);
//! let row = Row::new(id.clone())
//!     .with_key(ColumnKey::Label, "person")
//!     .with_key(ColumnKey::PrimaryValues, "marko")
//!     .with_cell(Property::new(
//!         ColumnKey::PropertyKey,
//!         "age",
//!         ColumnKey::PropertyValue,
//!         "29",
//!     ));
//!
//! assert_eq!(id.parts(), vec!["person", "marko"]);
//! assert_eq!(row.cells.len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{
    ColumnKey, Direction, EntityKind, Entry, Id, IdLayout, Property, Row, Value, ID_ESCAPE,
    ID_SEPARATOR,
};
