use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub planet_id: i32,

    /// Unique by convention only; checked before insert.
    pub planet_name: String,

    pub planet_type: String,

    pub home_star: String,

    pub mass: f64,

    pub radius: f64,

    pub distance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
