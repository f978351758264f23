//! Session interface and execution results.
//!
//! This module defines what the layer consumes from a store:
//!
//! - [`Session`] - Executes a [`Statement`](crate::Statement) and reports liveness
//! - [`ResultSet`] - Rows returned by a select, with column metadata
//!
//! # Error Handling
//!
//! All operations return [`StorageResult<T>`] which is an alias for
//! `Result<T, StorageError>`. See [`StorageError`] for the possible error variants.

mod error;
mod result;
mod traits;

pub use error::{StorageError, StorageResult};
pub use result::{ResultRow, ResultSet};
pub use traits::Session;
