use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Record;

/// A botanical species such as *Coffea arabica*.
#[derive(Serialize, Deserialize, Default, PartialEq, Clone, Debug, ToSchema)]
#[serde(default)]
pub struct PlantSpecies {
    pub id: String,
    pub name: String,
    pub taxon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlantSpecies {
    /// Converts an entity model to a species record at the repository boundary.
    pub fn from_entity(entity: entity::plant_species::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            taxon: entity.taxon,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl Record for PlantSpecies {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
