pub use sea_orm_migration::prelude::*;

mod m20250914_000001_create_plant_species_table;
mod m20250914_000002_create_plant_cultivar_table;
mod m20250921_000003_create_plant_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250914_000001_create_plant_species_table::Migration),
            Box::new(m20250914_000002_create_plant_cultivar_table::Migration),
            Box::new(m20250921_000003_create_plant_table::Migration),
        ]
    }
}
