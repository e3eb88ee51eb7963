use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    model::plant_species::PlantSpecies,
    server::{
        context::OperationContext,
        data::{new_record_id, Repository},
        error::store::StoreError,
    },
};

pub struct PlantSpeciesRepository {
    db: DatabaseConnection,
}

impl PlantSpeciesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for PlantSpeciesRepository {
    type Record = PlantSpecies;

    async fn list_all(&self, ctx: &OperationContext) -> Result<Vec<PlantSpecies>, StoreError> {
        ctx.run(async {
            let rows = entity::prelude::PlantSpecies::find().all(&self.db).await?;

            Ok(rows.into_iter().map(PlantSpecies::from_entity).collect())
        })
        .await
    }

    async fn get_by_id(
        &self,
        ctx: &OperationContext,
        id: &str,
    ) -> Result<PlantSpecies, StoreError> {
        ctx.run(async {
            entity::prelude::PlantSpecies::find_by_id(id.to_string())
                .one(&self.db)
                .await?
                .map(PlantSpecies::from_entity)
                .ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn create(
        &self,
        ctx: &OperationContext,
        record: &mut PlantSpecies,
    ) -> Result<(), StoreError> {
        ctx.run(async {
            let now = Utc::now();
            let model = entity::plant_species::ActiveModel {
                id: ActiveValue::Set(new_record_id()),
                name: ActiveValue::Set(record.name.clone()),
                taxon: ActiveValue::Set(record.taxon.clone()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(&self.db)
            .await?;

            *record = PlantSpecies::from_entity(model);
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        ctx: &OperationContext,
        record: &mut PlantSpecies,
    ) -> Result<(), StoreError> {
        ctx.run(async {
            let model = entity::plant_species::ActiveModel {
                id: ActiveValue::Unchanged(record.id.clone()),
                name: ActiveValue::Set(record.name.clone()),
                taxon: ActiveValue::Set(record.taxon.clone()),
                created_at: ActiveValue::NotSet,
                updated_at: ActiveValue::Set(Utc::now()),
            }
            .update(&self.db)
            .await?;

            *record = PlantSpecies::from_entity(model);
            Ok(())
        })
        .await
    }

    async fn delete(&self, ctx: &OperationContext, id: &str) -> Result<(), StoreError> {
        ctx.run(async {
            entity::prelude::PlantSpecies::delete_by_id(id.to_string())
                .exec(&self.db)
                .await?;

            Ok(())
        })
        .await
    }
}
