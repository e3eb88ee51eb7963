//! Plant fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::plant;

/// Default test plant identifier.
pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000003";

/// Creates a first-generation plant entity model of the fixture cultivar.
pub fn entity() -> plant::Model {
    plant::Model {
        id: DEFAULT_ID.to_string(),
        cultivar_id: Some(super::plant_cultivar::DEFAULT_ID.to_string()),
        species_id: Some(super::plant_species::DEFAULT_ID.to_string()),
        seed_id: None,
        pollen_id: None,
        generation: 1,
        planted_at: Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
        harvested_at: None,
        genetics: None,
        labels: Some(serde_json::json!(["greenhouse-a"])),
    }
}
