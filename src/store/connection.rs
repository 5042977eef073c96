use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{Result, StoreError};
use crate::sink::FailureSink;

use super::types::Store;

impl Store {
    /// Open a connection pool and build a store around it
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(config.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt).await.map_err(StoreError::Database)?;
        info!("database connection established");

        Ok(Self {
            db,
            failures: FailureSink::spawn_logging(),
            batch_size: config.batch_size.max(1),
        })
    }

    /// Check database connectivity
    pub async fn ping(&self) -> Result<()> {
        debug!("performing database health check");
        self.db.ping().await.map_err(Into::into)
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(Into::into)
    }
}
