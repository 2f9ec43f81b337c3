use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use smartkheti_core::domain::marketplace::{
    ports::MarketplaceService, value_objects::CropListingView,
};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListListingsQuery {
    /// Case-insensitive match against crop name, location and description.
    pub searchquery: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CropListingsResponse {
    pub data: Vec<CropListingView>,
}

#[utoipa::path(
    get,
    path = "/listings",
    tag = "marketplace",
    summary = "Browse listings, newest first",
    params(ListListingsQuery),
    responses(
        (status = 200, body = CropListingsResponse)
    ),
)]
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListListingsQuery>,
) -> Result<Response<CropListingsResponse>, ApiError> {
    let views = state
        .service
        .list_listings(query.searchquery)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CropListingsResponse { data: views }))
}
