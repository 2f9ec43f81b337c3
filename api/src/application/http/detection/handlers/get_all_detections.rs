use axum::{Extension, extract::State};
use smartkheti_core::domain::{detection::ports::DetectionService, user::entities::User};

use super::get_detection_history::DetectionHistoryResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/admin/detections",
    tag = "detection",
    summary = "Every user's detection records",
    description = "Staff-only listing across all accounts, newest first",
    responses(
        (status = 200, body = DetectionHistoryResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not staff")
    ),
)]
pub async fn get_all_detections(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Response<DetectionHistoryResponse>, ApiError> {
    let data = state
        .service
        .get_all_detections(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DetectionHistoryResponse { data }))
}
