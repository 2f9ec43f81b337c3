use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Seeded listing category, referenced by name from the create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

/// A crop offered for sale by a farmer. `farmer_name` and `category` are
/// resolved display values; only the ids live on the row itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CropListing {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub farmer_name: String,
    pub crop_name: String,
    pub category_id: Option<Uuid>,
    pub category: Option<String>,
    /// Free text such as "50 kg".
    pub quantity: String,
    #[schema(value_type = String)]
    pub rate: Decimal,
    pub location: String,
    pub contact_number: String,
    pub optional_contact: Option<String>,
    pub description: String,
    /// Object-storage keys of the listing photos.
    pub image_keys: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

impl CropListing {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        farmer_id: Uuid,
        farmer_name: String,
        crop_name: String,
        category_id: Option<Uuid>,
        category: Option<String>,
        quantity: String,
        rate: Decimal,
        location: String,
        contact_number: String,
        optional_contact: Option<String>,
        description: String,
        image_keys: Vec<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            farmer_id,
            farmer_name,
            crop_name,
            category_id,
            category,
            quantity,
            rate,
            location,
            contact_number,
            optional_contact,
            description,
            image_keys,
            posted_at: now,
        }
    }
}
