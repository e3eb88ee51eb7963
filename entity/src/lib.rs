//! SeaORM entities for the mendel schema.
//!
//! Identifiers are UUID strings generated by the repositories in the server crate, so no
//! primary key here is auto-incremented.

pub mod prelude;

pub mod plant;
pub mod plant_cultivar;
pub mod plant_species;
