//! Core data types for `WideGraph`.
//!
//! This module defines the identifiers, values, column keys and request/result
//! records that flow between the planner, the codec and the store.

mod column;
mod entry;
mod id;
mod kind;
mod row;
mod value;

pub use column::ColumnKey;
pub use entry::Entry;
pub use id::{Id, IdLayout, ID_ESCAPE, ID_SEPARATOR};
pub use kind::EntityKind;
pub use row::{Property, Row};
pub use value::{Direction, Value};
