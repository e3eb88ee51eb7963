use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Record;

/// A named cultivar of a species.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(default)]
pub struct PlantCultivar {
    pub id: String,
    pub species_id: String,
    pub name: String,
    pub cultivar: String,
    #[schema(value_type = Option<Object>)]
    pub genetics: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlantCultivar {
    /// Converts an entity model to a cultivar record at the repository boundary.
    pub fn from_entity(entity: entity::plant_cultivar::Model) -> Self {
        Self {
            id: entity.id,
            species_id: entity.species_id,
            name: entity.name,
            cultivar: entity.cultivar,
            genetics: entity.genetics,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Record for PlantCultivar {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
