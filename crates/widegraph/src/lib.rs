//! `WideGraph`
//!
//! This crate stores graph elements in a wide-column store addressed through
//! partition and clustering keys.
//!
//! # Overview
//!
//! Every [`EntityKind`](widegraph_core::EntityKind) lives in its own table
//! with a fixed [`TableLayout`]. Schema elements and index entries occupy one
//! row each; vertices and edges are spread over one row per property, keyed
//! by the element's identity columns followed by the property key.
//!
//! - Reads go through [`Table::query`]: the query is planned into selects,
//!   the selects run in sequence, and the rows are decoded by the
//!   [`EntryCodec`] and folded back into elements.
//! - Writes go through [`Table::insert`] and [`Table::delete`], which encode
//!   a [`Row`](widegraph_core::Row) into statements on a caller-owned
//!   [`MutationBatch`]. Nothing reaches the store until
//!   [`MutationBatch::commit`].
//! - [`SchemaManager`] creates and drops the tables.
//!
//! # Error Handling
//!
//! All operations return [`BackendResult<T>`], an alias for
//! `Result<T, BackendError>`.
//!
//! # Modules
//!
//! - [`layout`] - Static per-kind table layouts
//! - [`codec`] - Row decoding and mutation encoding
//! - [`batch`] - Atomic write batches
//! - [`schema`] - Table definitions and schema statements
//! - [`table`] - Per-kind table handles
//! - [`config`] - Backend configuration

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod batch;
pub mod codec;
pub mod config;
pub mod error;
pub mod layout;
pub mod schema;
pub mod table;

pub use batch::MutationBatch;
pub use codec::EntryCodec;
pub use config::{BackendConfig, ColumnType};
pub use error::{BackendError, BackendResult};
pub use layout::{ColumnRole, ColumnSpec, MergePolicy, TableLayout};
pub use schema::{SchemaManager, TableDefinition};
pub use table::Table;
