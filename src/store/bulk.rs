//! Batched bulk writes
//!
//! Applies an upsert or delete to every element of an input sequence without
//! letting one commit grow unbounded. Work is chunked into generations of
//! `batch_size` entities; each generation is a nested transaction committed
//! at its boundary, and one outer transaction covers the whole operation.
//! Bulk writes are therefore all-or-nothing: until the outer transaction
//! commits, every generation already committed can still be rolled back, and
//! a mid-sequence failure discards all of them.

use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, TransactionTrait};
use tracing::debug;

use crate::error::{Result, StoreError};

use super::types::Store;
use super::write::upsert_conflict_policy;

/// Outcome of a bulk write
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BulkReport {
    /// Entities staged across all generations
    pub entities: u64,
    /// Rows the store reported as affected
    pub rows_affected: u64,
    /// Generation commits performed; `ceil(entities / batch_size)` on success
    pub commits: u32,
}

impl Store {
    /// Upsert every entity in `entities`, committing in batches
    ///
    /// Entities are processed strictly in input order with commit boundaries
    /// every [`batch_size`](Store::batch_size) entities plus one final
    /// boundary for the remainder. An empty input returns immediately without
    /// opening a transaction. On failure the live generation and the covering
    /// transaction are rolled back, one report goes to the failure sink and
    /// the original error is returned.
    pub async fn save_many<A>(&self, entities: Vec<A>) -> Result<BulkReport>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        if entities.is_empty() {
            return Ok(BulkReport::default());
        }
        let total = entities.len();
        debug!(
            "bulk saving {} entities (batch size {})",
            total, self.batch_size
        );

        match self.save_many_inner(entities).await {
            Ok(report) => {
                debug_assert_eq!(report.commits as usize, total.div_ceil(self.batch_size));
                debug!(
                    "bulk save finished: {} entities, {} commits",
                    report.entities, report.commits
                );
                Ok(report)
            }
            Err(err) => {
                self.failures.report("save_many", &err);
                Err(StoreError::Database(err))
            }
        }
    }

    /// Delete every entity in `entities` by primary key, committing in
    /// batches
    ///
    /// Same batching, ordering and failure contract as
    /// [`save_many`](Store::save_many).
    pub async fn delete_many<A>(&self, entities: Vec<A>) -> Result<BulkReport>
    where
        A: ActiveModelTrait + Send,
    {
        if entities.is_empty() {
            return Ok(BulkReport::default());
        }
        let total = entities.len();
        debug!(
            "bulk deleting {} entities (batch size {})",
            total, self.batch_size
        );

        match self.delete_many_inner(entities).await {
            Ok(report) => {
                debug_assert_eq!(report.commits as usize, total.div_ceil(self.batch_size));
                debug!(
                    "bulk delete finished: {} entities, {} commits",
                    report.entities, report.commits
                );
                Ok(report)
            }
            Err(err) => {
                self.failures.report("delete_many", &err);
                Err(StoreError::Database(err))
            }
        }
    }

    async fn save_many_inner<A>(&self, entities: Vec<A>) -> std::result::Result<BulkReport, DbErr>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let total = entities.len();
        let policy = upsert_conflict_policy::<A::Entity>();
        let mut report = BulkReport::default();

        let txn = self.db.begin().await?;
        let mut generation = match txn.begin().await {
            Ok(generation) => generation,
            Err(err) => {
                let _ = txn.rollback().await;
                return Err(err);
            }
        };

        for (position, entity) in entities.into_iter().enumerate() {
            let staged = <A::Entity as EntityTrait>::insert(entity)
                .on_conflict(policy.clone())
                .exec_without_returning(&generation)
                .await;
            match staged {
                Ok(rows) => {
                    report.entities += 1;
                    report.rows_affected += rows;
                }
                Err(err) => {
                    let _ = generation.rollback().await;
                    let _ = txn.rollback().await;
                    return Err(err);
                }
            }

            let staged_count = position + 1;
            if staged_count % self.batch_size == 0 && staged_count < total {
                if let Err(err) = generation.commit().await {
                    let _ = txn.rollback().await;
                    return Err(err);
                }
                report.commits += 1;
                generation = match txn.begin().await {
                    Ok(next) => next,
                    Err(err) => {
                        let _ = txn.rollback().await;
                        return Err(err);
                    }
                };
            }
        }

        // the final generation always holds at least one staged entity
        if let Err(err) = generation.commit().await {
            let _ = txn.rollback().await;
            return Err(err);
        }
        report.commits += 1;

        txn.commit().await?;
        Ok(report)
    }

    async fn delete_many_inner<A>(&self, entities: Vec<A>) -> std::result::Result<BulkReport, DbErr>
    where
        A: ActiveModelTrait + Send,
    {
        let total = entities.len();
        let mut report = BulkReport::default();

        let txn = self.db.begin().await?;
        let mut generation = match txn.begin().await {
            Ok(generation) => generation,
            Err(err) => {
                let _ = txn.rollback().await;
                return Err(err);
            }
        };

        for (position, entity) in entities.into_iter().enumerate() {
            let staged = <A::Entity as EntityTrait>::delete(entity)
                .exec(&generation)
                .await;
            match staged {
                Ok(deleted) => {
                    report.entities += 1;
                    report.rows_affected += deleted.rows_affected;
                }
                Err(err) => {
                    let _ = generation.rollback().await;
                    let _ = txn.rollback().await;
                    return Err(err);
                }
            }

            let staged_count = position + 1;
            if staged_count % self.batch_size == 0 && staged_count < total {
                if let Err(err) = generation.commit().await {
                    let _ = txn.rollback().await;
                    return Err(err);
                }
                report.commits += 1;
                generation = match txn.begin().await {
                    Ok(next) => next,
                    Err(err) => {
                        let _ = txn.rollback().await;
                        return Err(err);
                    }
                };
            }
        }

        if let Err(err) = generation.commit().await {
            let _ = txn.rollback().await;
            return Err(err);
        }
        report.commits += 1;

        txn.commit().await?;
        Ok(report)
    }
}
