use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250914_000001_create_plant_species_table::PlantSpecies,
    m20250914_000002_create_plant_cultivar_table::PlantCultivar,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plant::Table)
                    .if_not_exists()
                    .col(string(Plant::Id).primary_key())
                    .col(string_null(Plant::CultivarId))
                    .col(string_null(Plant::SpeciesId))
                    // Lineage pointers are not constrained: parents may be pruned.
                    .col(string_null(Plant::SeedId))
                    .col(string_null(Plant::PollenId))
                    .col(integer(Plant::Generation).default(0))
                    .col(timestamp_with_time_zone_null(Plant::PlantedAt))
                    .col(timestamp_with_time_zone_null(Plant::HarvestedAt))
                    .col(json_binary_null(Plant::Genetics))
                    .col(json_binary_null(Plant::Labels))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_cultivar_id")
                            .from(Plant::Table, Plant::CultivarId)
                            .to(PlantCultivar::Table, PlantCultivar::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_species_id")
                            .from(Plant::Table, Plant::SpeciesId)
                            .to(PlantSpecies::Table, PlantSpecies::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plant {
    Table,
    Id,
    CultivarId,
    SpeciesId,
    SeedId,
    PollenId,
    Generation,
    PlantedAt,
    HarvestedAt,
    Genetics,
    Labels,
}
