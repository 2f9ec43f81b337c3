use axum::{Extension, Json, extract::State};
use smartkheti_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateProfileRequest,
};
use validator::Validate;

use super::register_user::UserResponse;
use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::UpdateProfileValidator,
};

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    summary = "Update the caller's profile",
    description = "Only the provided fields change; a password here replaces the current one",
    responses(
        (status = 200, body = UserResponse),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Unauthenticated")
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateProfileValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let updated = state
        .service
        .update_profile(
            user.id,
            UpdateProfileRequest {
                first_name: payload.first_name,
                last_name: payload.last_name,
                citizenship_number: payload.citizenship_number,
                province: payload.province,
                district: payload.district,
                municipality: payload.municipality,
                ward_number: payload.ward_number,
                preferred_language: payload.preferred_language,
                password: payload.password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse { data: updated }))
}
