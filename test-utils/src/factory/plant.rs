//! Plant factory for creating test plant rows.

use crate::factory::helpers::new_record_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plants with optional lineage pointers.
///
/// # Example
///
/// ```rust,ignore
/// let child = PlantFactory::new(&db)
///     .seed_id(&mother.id)
///     .pollen_id(&father.id)
///     .generation(2)
///     .build()
///     .await?;
/// ```
pub struct PlantFactory<'a> {
    db: &'a DatabaseConnection,
    cultivar_id: Option<String>,
    species_id: Option<String>,
    seed_id: Option<String>,
    pollen_id: Option<String>,
    generation: i32,
}

impl<'a> PlantFactory<'a> {
    /// Creates a new PlantFactory for a first-generation plant with no lineage.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            cultivar_id: None,
            species_id: None,
            seed_id: None,
            pollen_id: None,
            generation: 1,
        }
    }

    pub fn cultivar_id(mut self, id: impl Into<String>) -> Self {
        self.cultivar_id = Some(id.into());
        self
    }

    pub fn species_id(mut self, id: impl Into<String>) -> Self {
        self.species_id = Some(id.into());
        self
    }

    pub fn seed_id(mut self, id: impl Into<String>) -> Self {
        self.seed_id = Some(id.into());
        self
    }

    pub fn pollen_id(mut self, id: impl Into<String>) -> Self {
        self.pollen_id = Some(id.into());
        self
    }

    pub fn generation(mut self, generation: i32) -> Self {
        self.generation = generation;
        self
    }

    /// Builds and inserts the plant into the database, planted now.
    pub async fn build(self) -> Result<entity::plant::Model, DbErr> {
        entity::plant::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            cultivar_id: ActiveValue::Set(self.cultivar_id),
            species_id: ActiveValue::Set(self.species_id),
            seed_id: ActiveValue::Set(self.seed_id),
            pollen_id: ActiveValue::Set(self.pollen_id),
            generation: ActiveValue::Set(self.generation),
            planted_at: ActiveValue::Set(Some(Utc::now())),
            harvested_at: ActiveValue::Set(None),
            genetics: ActiveValue::Set(None),
            labels: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plant with default values and no lineage.
pub async fn create_plant(db: &DatabaseConnection) -> Result<entity::plant::Model, DbErr> {
    PlantFactory::new(db).build().await
}
