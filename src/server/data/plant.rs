use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    model::plant::Plant,
    server::{
        context::OperationContext,
        data::{new_record_id, Repository},
        error::store::StoreError,
    },
};

pub struct PlantRepository {
    db: DatabaseConnection,
}

impl PlantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(plant: &Plant) -> entity::plant::ActiveModel {
    entity::plant::ActiveModel {
        id: ActiveValue::Unchanged(plant.id.clone()),
        cultivar_id: ActiveValue::Set(plant.cultivar_id.clone()),
        species_id: ActiveValue::Set(plant.species_id.clone()),
        seed_id: ActiveValue::Set(plant.seed_id.clone()),
        pollen_id: ActiveValue::Set(plant.pollen_id.clone()),
        generation: ActiveValue::Set(plant.generation),
        planted_at: ActiveValue::Set(plant.planted_at),
        harvested_at: ActiveValue::Set(plant.harvested_at),
        genetics: ActiveValue::Set(plant.genetics.clone()),
        labels: ActiveValue::Set(plant.labels.clone()),
    }
}

#[async_trait]
impl Repository for PlantRepository {
    type Record = Plant;

    async fn list_all(&self, ctx: &OperationContext) -> Result<Vec<Plant>, StoreError> {
        ctx.run(async {
            let rows = entity::prelude::Plant::find().all(&self.db).await?;

            Ok(rows.into_iter().map(Plant::from_entity).collect())
        })
        .await
    }

    async fn get_by_id(&self, ctx: &OperationContext, id: &str) -> Result<Plant, StoreError> {
        ctx.run(async {
            entity::prelude::Plant::find_by_id(id.to_string())
                .one(&self.db)
                .await?
                .map(Plant::from_entity)
                .ok_or(StoreError::NotFound)
        })
        .await
    }

    /// Inserts a plant. A plant without `planted_at` is recorded as planted now.
    async fn create(&self, ctx: &OperationContext, record: &mut Plant) -> Result<(), StoreError> {
        ctx.run(async {
            let mut active = to_active_model(record);
            active.id = ActiveValue::Set(new_record_id());
            active.planted_at = ActiveValue::Set(Some(record.planted_at.unwrap_or_else(Utc::now)));

            let model = active.insert(&self.db).await?;

            *record = Plant::from_entity(model);
            Ok(())
        })
        .await
    }

    async fn update(&self, ctx: &OperationContext, record: &mut Plant) -> Result<(), StoreError> {
        ctx.run(async {
            let model = to_active_model(record).update(&self.db).await?;

            *record = Plant::from_entity(model);
            Ok(())
        })
        .await
    }

    async fn delete(&self, ctx: &OperationContext, id: &str) -> Result<(), StoreError> {
        ctx.run(async {
            entity::prelude::Plant::delete_by_id(id.to_string())
                .exec(&self.db)
                .await?;

            Ok(())
        })
        .await
    }
}
