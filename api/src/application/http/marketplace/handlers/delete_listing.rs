use axum::{
    Extension,
    extract::{Path, State},
};
use serde::Serialize;
use smartkheti_core::domain::{marketplace::ports::MarketplaceService, user::entities::User};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteListingResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/listings/{listing_id}",
    tag = "marketplace",
    summary = "Delete one of your listings",
    responses(
        (status = 200, body = DeleteListingResponse),
        (status = 403, description = "Not the listing owner"),
        (status = 404, description = "No such listing")
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(listing_id): Path<Uuid>,
) -> Result<Response<DeleteListingResponse>, ApiError> {
    state
        .service
        .delete_listing(user, listing_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteListingResponse {
        message: "Listing deleted.".to_string(),
    }))
}
