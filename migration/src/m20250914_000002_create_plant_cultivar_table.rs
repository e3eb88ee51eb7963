use sea_orm_migration::{prelude::*, schema::*};

use super::m20250914_000001_create_plant_species_table::PlantSpecies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlantCultivar::Table)
                    .if_not_exists()
                    .col(string(PlantCultivar::Id).primary_key())
                    .col(string(PlantCultivar::SpeciesId))
                    .col(string(PlantCultivar::Name))
                    .col(string(PlantCultivar::Cultivar))
                    .col(json_binary_null(PlantCultivar::Genetics))
                    .col(
                        timestamp_with_time_zone(PlantCultivar::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PlantCultivar::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_cultivar_species_id")
                            .from(PlantCultivar::Table, PlantCultivar::SpeciesId)
                            .to(PlantSpecies::Table, PlantSpecies::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlantCultivar::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlantCultivar {
    Table,
    Id,
    SpeciesId,
    Name,
    Cultivar,
    Genetics,
    CreatedAt,
    UpdatedAt,
}
