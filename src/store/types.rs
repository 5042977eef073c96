use sea_orm::DatabaseConnection;

use crate::sink::FailureSink;

/// Generic data-access facade over a SeaORM connection
///
/// Holds a connection pool, a failure sink and the bulk-write batch size.
/// Cheap to share behind an `Arc`; each operation checks a connection out of
/// the pool on demand.
#[derive(Debug)]
pub struct Store {
    pub(super) db: DatabaseConnection,
    pub(super) failures: FailureSink,
    pub(super) batch_size: usize,
}

impl Store {
    /// Wrap an existing connection
    ///
    /// Must be called from within a Tokio runtime (the default failure sink
    /// spawns a drain task).
    pub fn from_connection(db: DatabaseConnection, batch_size: usize) -> Self {
        Self {
            db,
            failures: FailureSink::spawn_logging(),
            batch_size: batch_size.max(1),
        }
    }

    /// Replace the failure sink
    pub fn with_failure_sink(mut self, failures: FailureSink) -> Self {
        self.failures = failures;
        self
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Number of entities staged per commit generation during bulk writes
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}
