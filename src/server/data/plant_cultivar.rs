use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    model::plant_cultivar::PlantCultivar,
    server::{
        context::OperationContext,
        data::{new_record_id, Repository},
        error::store::StoreError,
    },
};

pub struct PlantCultivarRepository {
    db: DatabaseConnection,
}

impl PlantCultivarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for PlantCultivarRepository {
    type Record = PlantCultivar;

    async fn list_all(&self, ctx: &OperationContext) -> Result<Vec<PlantCultivar>, StoreError> {
        ctx.run(async {
            let rows = entity::prelude::PlantCultivar::find().all(&self.db).await?;

            Ok(rows.into_iter().map(PlantCultivar::from_entity).collect())
        })
        .await
    }

    async fn get_by_id(
        &self,
        ctx: &OperationContext,
        id: &str,
    ) -> Result<PlantCultivar, StoreError> {
        ctx.run(async {
            entity::prelude::PlantCultivar::find_by_id(id.to_string())
                .one(&self.db)
                .await?
                .map(PlantCultivar::from_entity)
                .ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        record: &mut PlantCultivar,
    ) -> Result<(), StoreError> {
        ctx.run(async {
            let now = Utc::now();
            let model = entity::plant_cultivar::ActiveModel {
                id: ActiveValue::Set(new_record_id()),
                species_id: ActiveValue::Set(record.species_id.clone()),
                name: ActiveValue::Set(record.name.clone()),
                cultivar: ActiveValue::Set(record.cultivar.clone()),
                genetics: ActiveValue::Set(record.genetics.clone()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&self.db)
            .await?;

            *record = PlantCultivar::from_entity(model);
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        ctx: &OperationContext,
        record: &mut PlantCultivar,
    ) -> Result<(), StoreError> {
        ctx.run(async {
            let model = entity::plant_cultivar::ActiveModel {
                id: ActiveValue::Unchanged(record.id.clone()),
                species_id: ActiveValue::Set(record.species_id.clone()),
                name: ActiveValue::Set(record.name.clone()),
                cultivar: ActiveValue::Set(record.cultivar.clone()),
                genetics: ActiveValue::Set(record.genetics.clone()),
                created_at: ActiveValue::NotSet,
                updated_at: ActiveValue::Set(Utc::now()),
            }
            .update(&self.db)
            .await?;

            *record = PlantCultivar::from_entity(model);
            Ok(())
        })
        .await
    }

    async fn delete(&self, ctx: &OperationContext, id: &str) -> Result<(), StoreError> {
        ctx.run(async {
            entity::prelude::PlantCultivar::delete_by_id(id.to_string())
                .exec(&self.db)
                .await?;

            Ok(())
        })
        .await
    }
}
