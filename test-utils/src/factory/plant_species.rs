//! Plant species factory for creating test species rows.

use crate::factory::helpers::{new_record_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plant species with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let species = PlantSpeciesFactory::new(&db)
///     .name("Coffea")
///     .taxon("Coffea arabica")
///     .build()
///     .await?;
/// ```
pub struct PlantSpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    taxon: String,
}

impl<'a> PlantSpeciesFactory<'a> {
    /// Creates a new PlantSpeciesFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Species {n}"`
    /// - taxon: `"Genus species{n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Species {}", n),
            taxon: format!("Genus species{}", n),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn taxon(mut self, taxon: impl Into<String>) -> Self {
        self.taxon = taxon.into();
        self
    }

    /// Builds and inserts the species into the database.
    ///
    /// # Returns
    /// - `Ok(entity::plant_species::Model)` - Created species
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::plant_species::Model, DbErr> {
        let now = Utc::now();
        entity::plant_species::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            name: ActiveValue::Set(self.name),
            taxon: ActiveValue::Set(self.taxon),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a species with default values.
///
/// Shorthand for `PlantSpeciesFactory::new(db).build().await`.
pub async fn create_species(
    db: &DatabaseConnection,
) -> Result<entity::plant_species::Model, DbErr> {
    PlantSpeciesFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_species_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(PlantSpecies)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let species = create_species(db).await?;

        assert!(!species.id.is_empty());
        assert!(species.name.starts_with("Species "));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_species() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(PlantSpecies)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_species(db).await?;
        let second = create_species(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
