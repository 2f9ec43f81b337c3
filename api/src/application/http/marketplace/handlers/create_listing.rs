use axum::{
    Extension,
    extract::{Multipart, State},
};
use serde::Serialize;
use smartkheti_core::domain::{
    marketplace::{
        ports::MarketplaceService,
        value_objects::{CreateListingInput, CropListingView},
    },
    user::entities::User,
};
use utoipa::ToSchema;
use validator::Validate;

use super::{parse_rate, read_listing_form};
use crate::application::http::{
    marketplace::validators::CreateListingValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CropListingResponse {
    pub data: CropListingView,
}

#[utoipa::path(
    post,
    path = "/listings",
    tag = "marketplace",
    summary = "Post a crop for sale",
    description = "Multipart form with the listing fields plus one or more photos under the images field",
    responses(
        (status = 201, body = CropListingResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Unauthenticated")
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    multipart: Multipart,
) -> Result<Response<CropListingResponse>, ApiError> {
    let form = read_listing_form(multipart).await?;

    let payload = CreateListingValidator {
        crop_name: form.crop_name,
        category: form.category,
        quantity: form.quantity,
        rate: form.rate,
        location: form.location,
        contact_number: form.contact_number,
        optional_contact: form.optional_contact,
        description: form.description,
    };
    payload.validate().map_err(ApiError::from_validation)?;

    if form.images.is_empty() {
        return Err(ApiError::field_error("images", "This field is required."));
    }

    let rate = parse_rate(payload.rate.as_deref().unwrap_or_default())?;

    let view = state
        .service
        .create_listing(
            user,
            CreateListingInput {
                crop_name: payload.crop_name.unwrap_or_default(),
                category: payload.category,
                quantity: payload.quantity.unwrap_or_default(),
                rate,
                location: payload.location.unwrap_or_default(),
                contact_number: payload.contact_number.unwrap_or_default(),
                optional_contact: payload.optional_contact,
                description: payload.description.unwrap_or_default(),
                images: form.images,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CropListingResponse { data: view }))
}
