use axum::{Json, extract::State};
use serde::Serialize;
use smartkheti_core::domain::user::{
    entities::{PreferredLanguage, User},
    ports::UserService,
    value_objects::CreateUserRequest,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::RegisterUserValidator,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "user",
    summary = "Register a farmer account",
    responses(
        (status = 201, body = UserResponse),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Phone or citizenship number already registered")
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserValidator>,
) -> Result<Response<UserResponse>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let user = state
        .service
        .register(CreateUserRequest {
            phone: payload.phone,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            citizenship_number: payload.citizenship_number,
            province: payload.province,
            district: payload.district,
            municipality: payload.municipality,
            ward_number: payload.ward_number,
            preferred_language: payload.preferred_language.unwrap_or(PreferredLanguage::Np),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UserResponse { data: user }))
}
