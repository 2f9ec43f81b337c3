use axum::extract::{Path, State};
use smartkheti_core::domain::marketplace::ports::MarketplaceService;
use uuid::Uuid;

use super::create_listing::CropListingResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/listings/{listing_id}",
    tag = "marketplace",
    summary = "Fetch a single listing",
    responses(
        (status = 200, body = CropListingResponse),
        (status = 404, description = "No such listing")
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
) -> Result<Response<CropListingResponse>, ApiError> {
    let view = state
        .service
        .get_listing(listing_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CropListingResponse { data: view }))
}
