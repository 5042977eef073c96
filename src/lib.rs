//! # seabatch
//!
//! A generic data-access facade over [SeaORM]: load, save and delete operations
//! parameterized by entity type, plus batched bulk writes that commit in
//! fixed-size generations under one covering transaction.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use seabatch::{DatabaseConfig, Store};
//!
//! # mod item { use sea_orm::entity::prelude::*;
//! #   #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
//! #   #[sea_orm(table_name = "items")]
//! #   pub struct Model {
//! #       #[sea_orm(primary_key, auto_increment = false)]
//! #       pub id: i64,
//! #       pub label: String,
//! #   }
//! #   #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
//! #   pub enum Relation {}
//! #   impl ActiveModelBehavior for ActiveModel {}
//! # }
//! # use sea_orm::{ColumnTrait, Set};
//! #[tokio::main]
//! async fn main() -> seabatch::Result<()> {
//!     let store = Store::connect(&DatabaseConfig::default()).await?;
//!
//!     // Single-entity upsert, one commit
//!     store.save(item::ActiveModel {
//!         id: Set(1),
//!         label: Set("first".to_owned()),
//!     }).await?;
//!
//!     // Batched bulk upsert: one covering transaction, a commit every
//!     // `batch_size` entities, and a final commit for the remainder
//!     let rows: Vec<item::ActiveModel> = (2..=500)
//!         .map(|id| item::ActiveModel { id: Set(id), label: Set(format!("#{id}")) })
//!         .collect();
//!     let report = store.save_many(rows).await?;
//!     println!("{} entities in {} commits", report.entities, report.commits);
//!
//!     let first = store
//!         .load_filtered::<item::Entity, _>(item::Column::Id.eq(1))
//!         .await?;
//!     println!("{first:?}");
//!     Ok(())
//! }
//! ```
//!
//! [SeaORM]: https://www.sea-ql.org/SeaORM/

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod logging;
pub mod sink;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the commonly used types
pub use config::DatabaseConfig;
pub use error::{Result, StoreError};
pub use sink::{FailureReport, FailureSink};
pub use store::{BulkReport, Store};
