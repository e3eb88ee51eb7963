//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and for seeding in-memory repositories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let species = fixture::plant_species::entity();
//! assert_eq!(species.name, fixture::plant_species::DEFAULT_NAME);
//! ```

pub mod plant;
pub mod plant_cultivar;
pub mod plant_species;

pub use plant::entity as plant_entity;
pub use plant_cultivar::entity as plant_cultivar_entity;
pub use plant_species::entity as plant_species_entity;
