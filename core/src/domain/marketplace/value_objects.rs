use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ListingImageUpload {
    pub data: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct CreateListingInput {
    pub crop_name: String,
    pub category: Option<String>,
    pub quantity: String,
    pub rate: Decimal,
    pub location: String,
    pub contact_number: String,
    pub optional_contact: Option<String>,
    pub description: String,
    pub images: Vec<ListingImageUpload>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateListingInput {
    pub crop_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub rate: Option<Decimal>,
    pub location: Option<String>,
    pub contact_number: Option<String>,
    pub optional_contact: Option<String>,
    pub description: Option<String>,
    /// When present the stored photos are replaced wholesale.
    pub images: Option<Vec<ListingImageUpload>>,
}

/// A listing with photo keys resolved to fetchable URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CropListingView {
    pub id: Uuid,
    pub farmer: String,
    pub crop_name: String,
    pub category: Option<String>,
    pub quantity: String,
    #[schema(value_type = String)]
    pub rate: Decimal,
    pub location: String,
    pub contact_number: String,
    pub optional_contact: Option<String>,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    /// Absolute URLs (scheme and host included).
    pub images: Vec<String>,
}
