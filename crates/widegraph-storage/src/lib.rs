//! `WideGraph` Storage
//!
//! This crate provides the statement model and the session interface for a
//! wide-column store addressed through partition and clustering keys, plus an
//! in-memory backend that executes the same statements.
//!
//! # Overview
//!
//! Statements are plain values. A [`Select`], [`Insert`] or [`Delete`] is built
//! from [`Clause`]s and [`Literal`]s, renders to CQL text via `Display`, and is
//! handed to a [`Session`] wrapped in a [`Statement`]. Several mutations can be
//! grouped into a [`Batch`], which the store applies atomically.
//!
//! # Core Traits
//!
//! - [`Session`] - Executes statements and reports whether it is still open
//!
//! # Error Handling
//!
//! All session operations return [`StorageResult<T>`], an alias for
//! `Result<T, StorageError>`.
//!
//! # Example
//!
//! ```
//! use widegraph_storage::backends::MemorySession;
//! use widegraph_storage::{Clause, Insert, Select, Session, Statement};
//!
//! let session = MemorySession::new();
//! session
//!     .execute(&Statement::Raw(
//!         "CREATE TABLE IF NOT EXISTS users(name text, age text, PRIMARY KEY((name)));".into(),
//!     ))
//!     .unwrap();
//!
//! let insert = Insert::new("users").value("name", "alice").value("age", "30");
//! session.execute(&insert.into()).unwrap();
//!
//! let select = Select::new("users").filter(Clause::eq("name", "alice"));
//! let rows = session.execute(&select.into()).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows.rows()[0].get("age"), Some("30"));
//! ```
//!
//! # Modules
//!
//! - [`engine`] - Session trait, results and errors
//! - [`statement`] - Physical statement model and CQL rendering
//! - [`backends`] - Concrete session implementations

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod backends;
pub mod engine;
pub mod statement;

pub use engine::{ResultRow, ResultSet, Session, StorageError, StorageResult};
pub use statement::{
    Batch, Clause, CompareOp, Delete, Insert, Literal, Ordering, Select, SortDirection, Statement,
};
