//! Plant cultivar factory for creating test cultivar rows.

use crate::factory::helpers::{new_record_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cultivars belonging to an existing species.
pub struct PlantCultivarFactory<'a> {
    db: &'a DatabaseConnection,
    species_id: String,
    name: String,
    cultivar: String,
    genetics: Option<serde_json::Value>,
}

impl<'a> PlantCultivarFactory<'a> {
    /// Creates a new PlantCultivarFactory for the given species.
    ///
    /// Defaults:
    /// - name: `"Cultivar {n}"`
    /// - cultivar: `"cv-{n}"`
    /// - genetics: `None`
    pub fn new(db: &'a DatabaseConnection, species_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            species_id: species_id.into(),
            name: format!("Cultivar {}", n),
            cultivar: format!("cv-{}", n),
            genetics: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn genetics(mut self, genetics: serde_json::Value) -> Self {
        self.genetics = Some(genetics);
        self
    }

    /// Builds and inserts the cultivar into the database.
    pub async fn build(self) -> Result<entity::plant_cultivar::Model, DbErr> {
        let now = Utc::now();
        entity::plant_cultivar::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            species_id: ActiveValue::Set(self.species_id),
            name: ActiveValue::Set(self.name),
            cultivar: ActiveValue::Set(self.cultivar),
            genetics: ActiveValue::Set(self.genetics),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cultivar with default values for the given species.
pub async fn create_cultivar(
    db: &DatabaseConnection,
    species_id: &str,
) -> Result<entity::plant_cultivar::Model, DbErr> {
    PlantCultivarFactory::new(db, species_id).build().await
}
