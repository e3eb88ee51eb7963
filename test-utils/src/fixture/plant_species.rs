//! Plant species fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::plant_species;

/// Default test species identifier.
pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Default test species name.
pub const DEFAULT_NAME: &str = "Coffea";

/// Default test species taxon.
pub const DEFAULT_TAXON: &str = "Coffea arabica";

/// Creates a plant species entity model with default values.
///
/// # Default Values
/// - id: [`DEFAULT_ID`]
/// - name: `"Coffea"`
/// - taxon: `"Coffea arabica"`
/// - created_at / updated_at: `2025-01-01T00:00:00Z`
pub fn entity() -> plant_species::Model {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    plant_species::Model {
        id: DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        taxon: DEFAULT_TAXON.to_string(),
        created_at: timestamp,
        updated_at: timestamp,
    }
}
