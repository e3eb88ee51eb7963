use sea_orm::entity::prelude::*;

/// A single plant with its lineage.
///
/// `seed_id` and `pollen_id` point at the parent plants and are kept as plain
/// identifiers; parents may be pruned from the table while their offspring remain.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub cultivar_id: Option<String>,
    pub species_id: Option<String>,
    pub seed_id: Option<String>,
    pub pollen_id: Option<String>,
    pub generation: i32,
    pub planted_at: Option<DateTimeUtc>,
    pub harvested_at: Option<DateTimeUtc>,
    pub genetics: Option<Json>,
    pub labels: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plant_cultivar::Entity",
        from = "Column::CultivarId",
        to = "super::plant_cultivar::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PlantCultivar,
    #[sea_orm(
        belongs_to = "super::plant_species::Entity",
        from = "Column::SpeciesId",
        to = "super::plant_species::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PlantSpecies,
}

impl Related<super::plant_cultivar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantCultivar.def()
    }
}

impl Related<super::plant_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantSpecies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
