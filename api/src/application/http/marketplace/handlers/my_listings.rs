use axum::{Extension, extract::State};
use smartkheti_core::domain::{marketplace::ports::MarketplaceService, user::entities::User};

use super::list_listings::CropListingsResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/listings/my",
    tag = "marketplace",
    summary = "List your own listings, newest first",
    responses(
        (status = 200, body = CropListingsResponse),
        (status = 401, description = "Unauthenticated")
    ),
)]
pub async fn my_listings(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Response<CropListingsResponse>, ApiError> {
    let views = state
        .service
        .my_listings(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CropListingsResponse { data: views }))
}
