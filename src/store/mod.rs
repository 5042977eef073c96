//! Store facade over SeaORM
//!
//! [`Store`] wraps a pooled database connection and exposes generic
//! load/save/delete operations plus batched bulk writes. Every operation is
//! parameterized by entity type; the store owns no schema of its own.

// Module declarations
mod bulk;
mod connection;
mod query;
pub mod schema;
mod types;
mod write;

// Re-export public types
pub use bulk::BulkReport;
pub use types::Store;
