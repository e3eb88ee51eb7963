//! Plant cultivar fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::plant_cultivar;

/// Default test cultivar identifier.
pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000002";

/// Default test cultivar name.
pub const DEFAULT_NAME: &str = "Geisha";

/// Default test cultivar designation.
pub const DEFAULT_CULTIVAR: &str = "Gesha 1931";

/// Creates a plant cultivar entity model with default values.
///
/// The cultivar belongs to the species from [`super::plant_species::entity`] and carries
/// a small genetics document.
pub fn entity() -> plant_cultivar::Model {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    plant_cultivar::Model {
        id: DEFAULT_ID.to_string(),
        species_id: super::plant_species::DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        cultivar: DEFAULT_CULTIVAR.to_string(),
        genetics: Some(serde_json::json!({ "ploidy": 4 })),
        created_at: timestamp,
        updated_at: timestamp,
    }
}
