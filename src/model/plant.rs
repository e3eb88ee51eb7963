use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Record;

/// An individual plant.
///
/// `seed_id` and `pollen_id` point at the mother and father plants. All lineage
/// pointers are plain identifiers; nothing here resolves them.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(default)]
pub struct Plant {
    pub id: String,
    pub cultivar_id: Option<String>,
    pub species_id: Option<String>,
    pub seed_id: Option<String>,
    pub pollen_id: Option<String>,
    pub generation: i32,
    pub planted_at: Option<DateTime<Utc>>,
    pub harvested_at: Option<DateTime<Utc>>,
    #[schema(value_type = Option<Object>)]
    pub genetics: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub labels: Option<serde_json::Value>,
}

impl Plant {
    /// Converts an entity model to a plant record at the repository boundary.
    pub fn from_entity(entity: entity::plant::Model) -> Self {
        Self {
            id: entity.id,
            cultivar_id: entity.cultivar_id,
            species_id: entity.species_id,
            seed_id: entity.seed_id,
            pollen_id: entity.pollen_id,
            generation: entity.generation,
            planted_at: entity.planted_at,
            harvested_at: entity.harvested_at,
            genetics: entity.genetics,
            labels: entity.labels,
        }
    }
}

impl Record for Plant {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
