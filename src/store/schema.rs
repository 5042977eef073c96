//! Entity metadata helpers
//!
//! Table, column and key names come straight from SeaORM's declarative
//! mapping traits; nothing is discovered by reflection or rebuilt as raw SQL.

use sea_orm::{ActiveModelTrait, EntityTrait, IdenStatic, IntoActiveModel, Iterable, PrimaryKeyToColumn};

use crate::error::Result;

use super::types::Store;

/// Mapped table name of `E`
pub fn table_name<E: EntityTrait>() -> String {
    E::default().table_name().to_owned()
}

/// Mapped column names of `E`, in definition order
pub fn column_names<E: EntityTrait>() -> Vec<String> {
    <E::Column as Iterable>::iter()
        .map(|c| c.as_str().to_owned())
        .collect()
}

/// Primary-key column names of `E`
pub fn primary_key_names<E: EntityTrait>() -> Vec<String> {
    <E::PrimaryKey as Iterable>::iter()
        .map(|key| key.into_column().as_str().to_owned())
        .collect()
}

impl Store {
    /// Insert one entity keeping the primary-key value it carries
    ///
    /// A plain insert: whatever key the active model sets is written as-is
    /// instead of letting the store assign one. Fails on an identity that
    /// already exists.
    pub async fn insert_with_key<A>(&self, entity: A) -> Result<u64>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        <A::Entity as EntityTrait>::insert(entity)
            .exec_without_returning(&self.db)
            .await
            .map_err(Into::into)
    }
}
