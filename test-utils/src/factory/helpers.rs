//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh record identifier in the format the server repositories use.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a plant with its species and cultivar.
///
/// All entities are created with default values. Use the individual factories to
/// customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((species, cultivar, plant))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_plant_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::plant_species::Model,
        entity::plant_cultivar::Model,
        entity::plant::Model,
    ),
    DbErr,
> {
    let species = crate::factory::plant_species::create_species(db).await?;
    let cultivar = crate::factory::plant_cultivar::create_cultivar(db, &species.id).await?;
    let plant = crate::factory::plant::PlantFactory::new(db)
        .species_id(&species.id)
        .cultivar_id(&cultivar.id)
        .build()
        .await?;

    Ok((species, cultivar, plant))
}
