use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Login identifier, stored exactly as submitted.
    #[sea_orm(unique)]
    pub phone: String,

    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    #[sea_orm(unique)]
    pub citizenship_number: Option<String>,

    pub province: Option<String>,

    pub district: Option<String>,

    pub municipality: Option<String>,

    pub ward_number: Option<i16>,

    /// Object-storage key of the profile photo, if one was uploaded.
    pub profile_photo_key: Option<String>,

    /// "en" or "np".
    pub preferred_language: String,

    pub is_staff: bool,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detection_records::Entity")]
    DetectionRecords,

    #[sea_orm(has_many = "super::crop_listings::Entity")]
    CropListings,
}

impl Related<super::detection_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetectionRecords.def()
    }
}

impl Related<super::crop_listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CropListings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
