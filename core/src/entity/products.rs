use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub disease_id: Uuid,

    pub name: String,

    /// Object-storage key; presigned into an absolute URL at read time.
    pub image_key: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::disease_infos::Entity",
        from = "Column::DiseaseId",
        to = "super::disease_infos::Column::Id",
        on_delete = "Cascade"
    )]
    DiseaseInfo,
}

impl Related<super::disease_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiseaseInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
