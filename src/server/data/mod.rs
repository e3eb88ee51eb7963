//! Storage layer: the repository contract and its SeaORM implementations.
//!
//! Each entity has one repository, constructed once at startup around a clone of the
//! shared connection pool and used concurrently by every request. Repositories hold no
//! record state of their own. All operations run under an [`OperationContext`] and stop
//! as soon as it is canceled or its deadline passes.

pub mod plant;
pub mod plant_cultivar;
pub mod plant_species;

#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::{
    model::Record,
    server::{context::OperationContext, error::store::StoreError},
};

/// The five-operation persistence contract consumed by the CRUD dispatcher.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    type Record: Record;

    /// Returns every record, in no particular order. Zero rows is an empty vec.
    async fn list_all(&self, ctx: &OperationContext) -> Result<Vec<Self::Record>, StoreError>;

    /// Returns the record with `id`, or `StoreError::NotFound`.
    async fn get_by_id(&self, ctx: &OperationContext, id: &str)
        -> Result<Self::Record, StoreError>;

    /// Inserts `record`, overwriting its identity and other server-generated fields
    /// in place.
    async fn create(&self, ctx: &OperationContext, record: &mut Self::Record)
        -> Result<(), StoreError>;

    /// Replaces the record whose identity is `record.id()` and refreshes `record` with
    /// what was stored.
    async fn update(&self, ctx: &OperationContext, record: &mut Self::Record)
        -> Result<(), StoreError>;

    /// Removes the record with `id`. Removing a missing id is not an error.
    async fn delete(&self, ctx: &OperationContext, id: &str) -> Result<(), StoreError>;
}

/// Generates the identity for a newly created record.
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
