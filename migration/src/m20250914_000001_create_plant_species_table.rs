use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlantSpecies::Table)
                    .if_not_exists()
                    .col(string(PlantSpecies::Id).primary_key())
                    .col(string(PlantSpecies::Name))
                    .col(string(PlantSpecies::Taxon))
                    .col(
                        timestamp_with_time_zone(PlantSpecies::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PlantSpecies::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlantSpecies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlantSpecies {
    Table,
    Id,
    Name,
    Taxon,
    CreatedAt,
    UpdatedAt,
}
