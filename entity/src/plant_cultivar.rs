use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plant_cultivar")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub species_id: String,
    pub name: String,
    pub cultivar: String,
    pub genetics: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plant_species::Entity",
        from = "Column::SpeciesId",
        to = "super::plant_species::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    PlantSpecies,
    #[sea_orm(has_many = "super::plant::Entity")]
    Plant,
}

impl Related<super::plant_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantSpecies.def()
    }
}

impl Related<super::plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
