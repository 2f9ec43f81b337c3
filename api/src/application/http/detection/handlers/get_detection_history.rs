use axum::{Extension, extract::State};
use serde::Serialize;
use smartkheti_core::domain::{
    detection::{ports::DetectionService, value_objects::DetectionHistoryEntry},
    user::entities::User,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct DetectionHistoryResponse {
    pub data: Vec<DetectionHistoryEntry>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "detection",
    summary = "Caller's detection history, newest first",
    responses(
        (status = 200, body = DetectionHistoryResponse),
        (status = 401, description = "Unauthenticated")
    ),
)]
pub async fn get_detection_history(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Response<DetectionHistoryResponse>, ApiError> {
    let data = state
        .service
        .get_detection_history(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DetectionHistoryResponse { data }))
}
