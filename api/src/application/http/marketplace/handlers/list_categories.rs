use axum::extract::State;
use serde::Serialize;
use smartkheti_core::domain::marketplace::{entities::Category, ports::MarketplaceService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub data: Vec<Category>,
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "marketplace",
    summary = "List the seeded categories",
    responses(
        (status = 200, body = CategoriesResponse)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Response<CategoriesResponse>, ApiError> {
    let categories = state
        .service
        .list_categories()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoriesResponse { data: categories }))
}
