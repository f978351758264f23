//! Session implementations.
//!
//! - [`MemorySession`] - In-process tables that execute the statement model,
//!   used for tests and embedding

pub mod memory;

pub use memory::MemorySession;
