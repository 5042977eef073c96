//! Shared helpers for store integration tests
//!
//! Provides an in-memory SQLite store so the tests run without external
//! dependencies. Each call creates a completely isolated database instance.

use sea_orm::{ConnectionTrait, Schema, Set};
use seabatch::{DatabaseConfig, FailureReport, FailureSink, Store};
use tokio::sync::mpsc::UnboundedReceiver;

/// Inventory row used as the test entity
pub mod item {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
    #[sea_orm(table_name = "items")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i64,
        #[sea_orm(unique)]
        pub sku: String,
        pub label: String,
        pub quantity: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Append-only row with an auto-incrementing key, for explicit-key inserts
pub mod journal {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "journal")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub message: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// In-memory SQLite configuration (single connection, required for
/// `sqlite::memory:`)
pub fn test_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
        batch_size: 100,
        sqlx_logging: false,
    }
}

/// Create an isolated store with the test tables and a capturing failure
/// sink
pub async fn test_store() -> (Store, UnboundedReceiver<FailureReport>) {
    let store = Store::connect(&test_config())
        .await
        .expect("failed to open in-memory store");
    let (sink, reports) = FailureSink::channel();
    let store = store.with_failure_sink(sink);

    let conn = store.connection();
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    conn.execute(backend.build(&schema.create_table_from_entity(item::Entity)))
        .await
        .expect("failed to create items table");
    conn.execute(backend.build(&schema.create_table_from_entity(journal::Entity)))
        .await
        .expect("failed to create journal table");

    (store, reports)
}

/// Build one item row with a unique sku derived from the id
pub fn item_row(id: i64) -> item::ActiveModel {
    item::ActiveModel {
        id: Set(id),
        sku: Set(format!("sku-{id}")),
        label: Set(format!("item {id}")),
        quantity: Set((id % 4) as i32),
    }
}

/// Build a contiguous range of item rows
pub fn item_rows(ids: std::ops::RangeInclusive<i64>) -> Vec<item::ActiveModel> {
    ids.map(item_row).collect()
}
