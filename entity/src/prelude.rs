pub use super::plant::Entity as Plant;
pub use super::plant_cultivar::Entity as PlantCultivar;
pub use super::plant_species::Entity as PlantSpecies;
