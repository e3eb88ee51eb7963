//! Plant-breeding record service.
//!
//! Species, cultivars and individual plants (with seed and pollen lineage) are served
//! over a uniform JSON CRUD API backed by SeaORM.

pub mod model;
pub mod server;
