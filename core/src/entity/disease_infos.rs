use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference table. Uniqueness on (lower(crop), lower(name)) is enforced by a
/// functional index in the migrations, which sea-orm cannot express here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "disease_infos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub crop: String,

    pub name: String,

    pub short_remedy: String,

    pub treatment: String,

    pub recheck_advice: String,

    pub is_healthy: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
