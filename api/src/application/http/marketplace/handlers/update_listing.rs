use axum::{
    Extension,
    extract::{Multipart, Path, State},
};
use smartkheti_core::domain::{
    marketplace::{ports::MarketplaceService, value_objects::UpdateListingInput},
    user::entities::User,
};
use uuid::Uuid;
use validator::Validate;

use super::{create_listing::CropListingResponse, parse_rate, read_listing_form};
use crate::application::http::{
    marketplace::validators::UpdateListingValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/listings/{listing_id}",
    tag = "marketplace",
    summary = "Update one of your listings",
    description = "Partial multipart form; photos sent under images replace the stored ones wholesale",
    responses(
        (status = 200, body = CropListingResponse),
        (status = 403, description = "Not the listing owner"),
        (status = 404, description = "No such listing")
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(listing_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Response<CropListingResponse>, ApiError> {
    let form = read_listing_form(multipart).await?;

    let payload = UpdateListingValidator {
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

    let rate = match payload.rate.as_deref() {
        Some(rate) => Some(parse_rate(rate)?),
        None => None,
    };

    let images = if form.images.is_empty() {
        None
    } else {
        Some(form.images)
    };

    let view = state
        .service
        .update_listing(
            user,
            listing_id,
            UpdateListingInput {
                crop_name: payload.crop_name,
                category: payload.category,
                quantity: payload.quantity,
                rate,
                location: payload.location,
                contact_number: payload.contact_number,
                optional_contact: payload.optional_contact,
                description: payload.description,
                images,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CropListingResponse { data: view }))
}
