use sea_orm::sea_query::IntoCondition;
use sea_orm::{EntityTrait, FromQueryResult, PartialModelTrait, QueryFilter, Select};
use tracing::debug;

use crate::error::Result;

use super::schema;
use super::types::Store;

impl Store {
    /// Build a deferred query over all rows of `E`
    ///
    /// Nothing executes until the returned [`Select`] is awaited, so callers
    /// can keep composing filters, ordering and pagination onto it.
    pub fn select<E: EntityTrait>(&self) -> Select<E> {
        E::find()
    }

    /// Build a deferred query over the rows of `E` matching `filter`
    pub fn select_where<E, F>(&self, filter: F) -> Select<E>
    where
        E: EntityTrait,
        F: IntoCondition,
    {
        E::find().filter(filter)
    }

    /// Load every row of `E`
    pub async fn load_all<E: EntityTrait>(&self) -> Result<Vec<E::Model>> {
        debug!("loading all rows of {}", schema::table_name::<E>());
        E::find().all(&self.db).await.map_err(Into::into)
    }

    /// Load the rows of `E` matching `filter`
    pub async fn load_filtered<E, F>(&self, filter: F) -> Result<Vec<E::Model>>
    where
        E: EntityTrait,
        F: IntoCondition,
    {
        debug!("loading filtered rows of {}", schema::table_name::<E>());
        E::find().filter(filter).all(&self.db).await.map_err(Into::into)
    }

    /// Load every row of `E`, projected to the partial model `M`
    pub async fn load_all_as<E, M>(&self) -> Result<Vec<M>>
    where
        E: EntityTrait,
        M: PartialModelTrait + FromQueryResult,
    {
        E::find()
            .into_partial_model::<M>()
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Load the rows of `E` matching `filter`, projected to the partial
    /// model `M`
    pub async fn load_filtered_as<E, M, F>(&self, filter: F) -> Result<Vec<M>>
    where
        E: EntityTrait,
        M: PartialModelTrait + FromQueryResult,
        F: IntoCondition,
    {
        E::find()
            .filter(filter)
            .into_partial_model::<M>()
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Check whether at least one row of `E` matches `filter`
    pub async fn exists<E, F>(&self, filter: F) -> Result<bool>
    where
        E: EntityTrait,
        F: IntoCondition,
    {
        let found = E::find().filter(filter).one(&self.db).await?;
        Ok(found.is_some())
    }
}
