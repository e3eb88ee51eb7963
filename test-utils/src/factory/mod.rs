//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let species = factory::plant_species::create_species(&db).await?;
//!     let (species, cultivar, plant) =
//!         factory::helpers::create_plant_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let species = factory::plant_species::PlantSpeciesFactory::new(&db)
//!     .name("Coffea")
//!     .taxon("Coffea arabica")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod plant;
pub mod plant_cultivar;
pub mod plant_species;

pub use plant::create_plant;
pub use plant_cultivar::create_cultivar;
pub use plant_species::create_species;
