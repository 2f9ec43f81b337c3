pub mod create_listing;
pub mod delete_listing;
pub mod get_listing;
pub mod list_categories;
pub mod list_listings;
pub mod my_listings;
pub mod update_listing;

use axum::extract::{Multipart, multipart::Field};
use rust_decimal::Decimal;
use smartkheti_core::domain::marketplace::value_objects::ListingImageUpload;

use crate::application::http::server::api_entities::api_error::ApiError;

const MAX_PHOTO_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Raw multipart form for create and update. Text parts land as Options so
/// the validators can report missing fields one by one.
#[derive(Default)]
pub(super) struct ListingForm {
    pub crop_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub rate: Option<String>,
    pub location: Option<String>,
    pub contact_number: Option<String>,
    pub optional_contact: Option<String>,
    pub description: Option<String>,
    pub images: Vec<ListingImageUpload>,
}

pub(super) async fn read_listing_form(mut multipart: Multipart) -> Result<ListingForm, ApiError> {
    let mut form = ListingForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "images" | "image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_string();

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_PHOTO_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_PHOTO_SIZE
                    )));
                }

                form.images.push(ListingImageUpload {
                    data: data.to_vec(),
                    content_type,
                });
            }
            "crop_name" => form.crop_name = Some(read_text(field).await?),
            "category" => form.category = Some(read_text(field).await?),
            "quantity" => form.quantity = Some(read_text(field).await?),
            "rate" => form.rate = Some(read_text(field).await?),
            "location" => form.location = Some(read_text(field).await?),
            "contact_number" => form.contact_number = Some(read_text(field).await?),
            "optional_contact" => form.optional_contact = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read form field: {}", e)))
}

/// The validators already pin the format; this only converts.
pub(super) fn parse_rate(rate: &str) -> Result<Decimal, ApiError> {
    rate.parse::<Decimal>()
        .map_err(|_| ApiError::field_error("rate", "Enter a valid number."))
}
