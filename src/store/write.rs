use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, EntityTrait, IdenStatic, IntoActiveModel, Iterable, PrimaryKeyToColumn};
use tracing::debug;

use crate::error::{Result, StoreError};

use super::types::Store;

/// Conflict policy that turns an insert into an upsert keyed on the primary
/// key: on conflict, every non-key column is overwritten
///
/// Entities whose columns are all part of the key fall back to do-nothing,
/// since there is nothing left to update.
pub(super) fn upsert_conflict_policy<E: EntityTrait>() -> OnConflict {
    let key_columns: Vec<E::Column> = <E::PrimaryKey as Iterable>::iter()
        .map(PrimaryKeyToColumn::into_column)
        .collect();
    let key_names: Vec<&str> = key_columns.iter().map(|c| c.as_str()).collect();
    let data_columns: Vec<E::Column> = <E::Column as Iterable>::iter()
        .filter(|c| !key_names.contains(&c.as_str()))
        .collect();

    let mut policy = OnConflict::columns(key_columns);
    if data_columns.is_empty() {
        policy.do_nothing();
    } else {
        policy.update_columns(data_columns);
    }
    policy
}

impl Store {
    /// Upsert one entity in one commit
    ///
    /// An entity whose identity already exists is updated, an unknown
    /// identity is inserted. On failure the error is reported to the failure
    /// sink and returned unchanged.
    pub async fn save<A>(&self, entity: A) -> Result<u64>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let result = <A::Entity as EntityTrait>::insert(entity)
            .on_conflict(upsert_conflict_policy::<A::Entity>())
            .exec_without_returning(&self.db)
            .await;

        match result {
            Ok(rows) => Ok(rows),
            Err(err) => {
                self.failures.report("save", &err);
                Err(StoreError::Database(err))
            }
        }
    }

    /// [`save`](Store::save), treating an absent entity as a silent no-op
    pub async fn save_opt<A>(&self, entity: Option<A>) -> Result<u64>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        match entity {
            Some(entity) => self.save(entity).await,
            None => Ok(0),
        }
    }

    /// Delete one entity by its primary key, in one commit
    ///
    /// The entity is not re-read first; the delete is keyed on the primary
    /// key carried by the model. Returns the number of rows removed (0 for
    /// an unknown identity). On failure the error is reported to the failure
    /// sink and returned unchanged.
    pub async fn delete<A>(&self, entity: A) -> Result<u64>
    where
        A: ActiveModelTrait + Send,
    {
        let result = <A::Entity as EntityTrait>::delete(entity).exec(&self.db).await;

        match result {
            Ok(deleted) => {
                debug!("deleted {} row(s)", deleted.rows_affected);
                Ok(deleted.rows_affected)
            }
            Err(err) => {
                self.failures.report("delete", &err);
                Err(StoreError::Database(err))
            }
        }
    }

    /// [`delete`](Store::delete), treating an absent entity as a silent
    /// no-op
    pub async fn delete_opt<A>(&self, entity: Option<A>) -> Result<u64>
    where
        A: ActiveModelTrait + Send,
    {
        match entity {
            Some(entity) => self.delete(entity).await,
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::widget;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait, Set};

    #[test]
    fn test_upsert_policy_targets_primary_key() {
        let row = widget::ActiveModel {
            id: Set(1),
            name: Set("bolt".to_owned()),
            count: Set(3),
        };
        let stmt = widget::Entity::insert(row)
            .on_conflict(upsert_conflict_policy::<widget::Entity>())
            .build(DbBackend::Sqlite);

        assert!(stmt.sql.contains("ON CONFLICT"), "sql: {}", stmt.sql);
        assert!(stmt.sql.contains("DO UPDATE SET"), "sql: {}", stmt.sql);
        // the key column must not be rewritten by the update clause
        let update_clause = stmt.sql.split("DO UPDATE SET").nth(1).unwrap();
        assert!(!update_clause.contains("\"id\""), "sql: {}", stmt.sql);
    }
}
